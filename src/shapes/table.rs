//! Tables and the graphic frames that hold them.

use serde_json::{Map, Value};

use crate::common::enums::{MsoShapeType, MsoVerticalAnchor};
use crate::common::{EnumMember, Error, Length, Result};
use crate::dml::FillFormat;
use crate::introspection::{AiSummary, Fields, Geometry, Introspect, PropertyValue};
use crate::text::{TextFrame, preview};

use super::base::{BaseShape, ShapeContent};

const DEFAULT_CELL_MARGIN_X: Length = Length::from_emus(91_440);
const DEFAULT_CELL_MARGIN_Y: Length = Length::from_emus(45_720);

/// A cell of a table.
///
/// A merged range is represented by its top-left cell, the merge origin,
/// carrying the span; every other cell of the range is flagged as spanned.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    text_frame: TextFrame,
    fill: FillFormat,
    margin_left: Length,
    margin_right: Length,
    margin_top: Length,
    margin_bottom: Length,
    vertical_anchor: Option<MsoVerticalAnchor>,
    span_height: u32,
    span_width: u32,
    is_spanned: bool,
}

impl Default for TableCell {
    fn default() -> Self {
        Self {
            text_frame: TextFrame::default(),
            fill: FillFormat::default(),
            margin_left: DEFAULT_CELL_MARGIN_X,
            margin_right: DEFAULT_CELL_MARGIN_X,
            margin_top: DEFAULT_CELL_MARGIN_Y,
            margin_bottom: DEFAULT_CELL_MARGIN_Y,
            vertical_anchor: None,
            span_height: 1,
            span_width: 1,
            is_spanned: false,
        }
    }
}

impl TableCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell holding plain text.
    pub fn from_text(text: &str) -> Self {
        Self {
            text_frame: TextFrame::from_text(text),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: FillFormat) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_vertical_anchor(mut self, anchor: MsoVerticalAnchor) -> Self {
        self.vertical_anchor = Some(anchor);
        self
    }

    /// Set the four insets: left, top, right, bottom.
    pub fn with_margins(mut self, left: Length, top: Length, right: Length, bottom: Length) -> Self {
        self.margin_left = left;
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self
    }

    #[inline]
    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn text(&self) -> String {
        self.text_frame.text()
    }

    #[inline]
    pub fn fill(&self) -> &FillFormat {
        &self.fill
    }

    pub fn vertical_anchor(&self) -> Option<MsoVerticalAnchor> {
        self.vertical_anchor
    }

    /// True for the top-left cell of a merged range.
    #[inline]
    pub fn is_merge_origin(&self) -> bool {
        self.span_height > 1 || self.span_width > 1
    }

    /// True for a cell covered by a merge origin elsewhere.
    #[inline]
    pub fn is_spanned(&self) -> bool {
        self.is_spanned
    }

    #[inline]
    pub fn span_height(&self) -> u32 {
        self.span_height
    }

    #[inline]
    pub fn span_width(&self) -> u32 {
        self.span_width
    }
}

impl Introspect for TableCell {
    fn type_name(&self) -> &'static str {
        "_Cell"
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("text_frame", &self.text_frame as &dyn Introspect)
            .with("fill", &self.fill as &dyn Introspect)
            .with("margin_left", self.margin_left)
            .with("margin_right", self.margin_right)
            .with("margin_top", self.margin_top)
            .with("margin_bottom", self.margin_bottom)
            .with("vertical_anchor", PropertyValue::enumeration_opt(self.vertical_anchor))
            .with("is_merge_origin", self.is_merge_origin())
            .with("is_spanned", self.is_spanned)
            .with("span_height", self.span_height)
            .with("span_width", self.span_width))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let text = self.text();
        let text = text.trim();
        let content = if text.is_empty() {
            "empty".to_string()
        } else {
            format!("containing '{}'", preview(text, 50))
        };
        let merge = if self.is_merge_origin() {
            format!(
                " Merged across {} column(s) and {} row(s).",
                self.span_width, self.span_height
            )
        } else if self.is_spanned {
            " Spanned by a merged cell.".to_string()
        } else {
            String::new()
        };

        Ok(AiSummary::new("A cell of a table.")
            .with_summary(format!("Cell {content}.{merge}"))
            .with_operations([
                "access text (cell.text)",
                "modify text (cell.text = 'new')",
                "access text_frame (cell.text_frame)",
                "modify fill (cell.fill)",
                "check merge status (cell.is_merge_origin, cell.is_spanned)",
            ]))
    }
}

/// A row of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    height: Length,
    cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(height: Length) -> Self {
        Self {
            height,
            cells: Vec::new(),
        }
    }

    /// Row of plain-text cells.
    pub fn from_texts<'a>(height: Length, texts: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            height,
            cells: texts.into_iter().map(TableCell::from_text).collect(),
        }
    }

    pub fn with_cell(mut self, cell: TableCell) -> Self {
        self.cells.push(cell);
        self
    }

    #[inline]
    pub fn height(&self) -> Length {
        self.height
    }

    #[inline]
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }
}

/// A grid of cells with optional banded and header formatting.
///
/// # Examples
///
/// ```rust
/// use pptx_introspect::common::Length;
/// use pptx_introspect::shapes::{Table, TableRow};
///
/// let width = Length::from_inches(2.0);
/// let height = Length::from_inches(0.4);
/// let mut table = Table::new([width, width])
///     .with_row(TableRow::from_texts(height, ["Region", "Revenue"]))?
///     .with_row(TableRow::from_texts(height, ["North", "1.2M"]))?;
/// table.merge((1, 0), (1, 1))?;
/// assert!(table.cell(1, 1)?.is_spanned());
/// # Ok::<(), pptx_introspect::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Length>,
    rows: Vec<TableRow>,
    first_row: bool,
    first_col: bool,
    last_row: bool,
    last_col: bool,
    horz_banding: bool,
    vert_banding: bool,
}

impl Table {
    /// Empty table with the given column widths.
    ///
    /// New tables get PowerPoint's default style: a header row and
    /// horizontal banding.
    pub fn new(columns: impl IntoIterator<Item = Length>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            rows: Vec::new(),
            first_row: true,
            first_col: false,
            last_row: false,
            last_col: false,
            horz_banding: true,
            vert_banding: false,
        }
    }

    /// Append a row, which must have one cell per column.
    pub fn with_row(mut self, row: TableRow) -> Result<Self> {
        if row.cells.len() != self.columns.len() {
            return Err(Error::InvalidValue(format!(
                "row has {} cells but the table has {} columns",
                row.cells.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(self)
    }

    pub fn with_first_row(mut self, on: bool) -> Self {
        self.first_row = on;
        self
    }

    pub fn with_first_col(mut self, on: bool) -> Self {
        self.first_col = on;
        self
    }

    pub fn with_last_row(mut self, on: bool) -> Self {
        self.last_row = on;
        self
    }

    pub fn with_last_col(mut self, on: bool) -> Self {
        self.last_col = on;
        self
    }

    pub fn with_horz_banding(mut self, on: bool) -> Self {
        self.horz_banding = on;
        self
    }

    pub fn with_vert_banding(mut self, on: bool) -> Self {
        self.vert_banding = on;
        self
    }

    /// Column widths, left to right.
    #[inline]
    pub fn columns(&self) -> &[Length] {
        &self.columns
    }

    #[inline]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn first_row(&self) -> bool {
        self.first_row
    }

    pub fn first_col(&self) -> bool {
        self.first_col
    }

    pub fn last_row(&self) -> bool {
        self.last_row
    }

    pub fn last_col(&self) -> bool {
        self.last_col
    }

    pub fn horz_banding(&self) -> bool {
        self.horz_banding
    }

    pub fn vert_banding(&self) -> bool {
        self.vert_banding
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&TableCell> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(col))
            .ok_or_else(|| self.out_of_range(row, col))
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut TableCell> {
        let err = self.out_of_range(row, col);
        self.rows
            .get_mut(row)
            .and_then(|r| r.cells.get_mut(col))
            .ok_or(err)
    }

    fn out_of_range(&self, row: usize, col: usize) -> Error {
        Error::InvalidValue(format!(
            "cell ({row}, {col}) is outside the {}x{} table",
            self.rows.len(),
            self.columns.len()
        ))
    }

    /// Merge the rectangular range spanned by two diagonal corner cells.
    ///
    /// Fails when either corner is out of range or the range overlaps an
    /// existing merge.
    pub fn merge(&mut self, a: (usize, usize), b: (usize, usize)) -> Result<()> {
        let (top, bottom) = (a.0.min(b.0), a.0.max(b.0));
        let (left, right) = (a.1.min(b.1), a.1.max(b.1));
        self.cell(bottom, right)?;

        for row in top..=bottom {
            for col in left..=right {
                let cell = self.cell(row, col)?;
                if cell.is_merge_origin() || cell.is_spanned() {
                    return Err(Error::InvalidValue(format!(
                        "range overlaps the merged cell at ({row}, {col})"
                    )));
                }
            }
        }

        let origin = self.cell_mut(top, left)?;
        origin.span_height = u32::try_from(bottom - top + 1).unwrap_or(u32::MAX);
        origin.span_width = u32::try_from(right - left + 1).unwrap_or(u32::MAX);
        for row in top..=bottom {
            for col in left..=right {
                if (row, col) != (top, left) {
                    self.cell_mut(row, col)?.is_spanned = true;
                }
            }
        }
        Ok(())
    }

    fn formatting_features(&self) -> Vec<&'static str> {
        [
            (self.first_row, "special first row formatting"),
            (self.last_row, "special last row formatting"),
            (self.first_col, "special first column formatting"),
            (self.last_col, "special last column formatting"),
            (self.horz_banding, "horizontal banding"),
            (self.vert_banding, "vertical banding"),
        ]
        .into_iter()
        .filter_map(|(on, label)| on.then_some(label))
        .collect()
    }
}

impl Introspect for Table {
    fn type_name(&self) -> &'static str {
        "Table"
    }

    fn properties(&self) -> Result<Fields<'_>> {
        let rows = self
            .rows
            .iter()
            .map(|row| PropertyValue::objects(&row.cells))
            .collect::<Vec<_>>();
        let row_heights = self.rows.iter().map(TableRow::height).collect::<Vec<_>>();
        Ok(Fields::new()
            .with("first_row", self.first_row)
            .with("last_row", self.last_row)
            .with("first_col", self.first_col)
            .with("last_col", self.last_col)
            .with("horz_banding", self.horz_banding)
            .with("vert_banding", self.vert_banding)
            .with("columns", self.columns.clone())
            .with("row_heights", row_heights)
            .with("rows", rows))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let features = self.formatting_features();
        let formatting = if features.is_empty() {
            String::new()
        } else {
            format!(" with {}", features.join(", "))
        };
        let cols = if self.rows.is_empty() { 0 } else { self.columns.len() };

        Ok(AiSummary::new("A grid of cells organized in rows and columns.")
            .with_summary(format!("A {}x{} table{formatting}.", self.rows.len(), cols))
            .with_operations([
                "access cell (table.cell(row, col))",
                "iterate cells (table.iter_cells())",
                "access rows/columns (table.rows, table.columns)",
                "modify formatting (table.first_row, table.horz_banding, etc.)",
                "get dimensions (len(table.rows), len(table.columns))",
            ]))
    }
}

/// Shape hosting a table.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicFrame {
    base: BaseShape,
    table: Table,
}

impl GraphicFrame {
    pub fn new(base: BaseShape, table: Table) -> Self {
        Self { base, table }
    }

    #[inline]
    pub fn base(&self) -> &BaseShape {
        &self.base
    }

    #[inline]
    pub fn shape_type(&self) -> MsoShapeType {
        MsoShapeType::Table
    }

    #[inline]
    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl Introspect for GraphicFrame {
    fn type_name(&self) -> &'static str {
        "GraphicFrame"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(self.base.identity_fields(self.type_name(), self.shape_type()))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(self
            .base
            .geometry_fields()
            .with("has_table", true)
            .with("table", &self.table as &dyn Introspect))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let summary = self
            .base
            .ai_summary(&format!("A {} shape", self.shape_type().name()));
        Ok(summary
            .with_summary(format!(
                "Graphic frame holding a {}x{} table.",
                self.table.rows.len(),
                self.table.columns.len()
            ))
            .with_operations(["access table (graphic_frame.table)"]))
    }

    fn tree_identity(&self) -> Map<String, Value> {
        self.base.tree_identity(self.type_name(), self.shape_type())
    }

    fn tree_geometry(&self) -> Option<Geometry> {
        Some(self.base.geometry())
    }

    fn content_summary(&self) -> String {
        self.base
            .content_summary(self.type_name(), self.shape_type(), ShapeContent::Table)
    }
}
