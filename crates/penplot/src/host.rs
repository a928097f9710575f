//! Host-document integration: the trait a plugin runtime implements and the
//! insertion routine that places a finished chart into the document.

use penplot_core::{ChartResult, TextLabel};

/// Name of the throwaway background rect the SVG importer adds under an
/// imported group; removed after ungrouping so it does not cover the chart.
pub const BACKGROUND_CHILD_NAME: &str = "base-background";
/// Texts go in above the board background, below nothing else.
pub const TEXT_INSERT_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextId(pub u64);

/// The slice of a design-tool document the chart insertion needs. Fallible
/// operations return `Option` because hosts may reject content (an SVG the
/// importer cannot parse, a text the font system cannot shape) without that
/// being an error of ours.
pub trait HostDocument {
    fn create_board(&mut self, width: f64, height: f64) -> BoardId;
    fn create_shape_from_svg(&mut self, svg: &str) -> Option<ShapeId>;
    fn append_to_board(&mut self, board: BoardId, shape: ShapeId);
    /// Dissolves a group shape, reparenting its children.
    fn ungroup(&mut self, shape: ShapeId);
    /// Removes the first child of `board` with the given name. Returns
    /// whether one was found.
    fn remove_child_named(&mut self, board: BoardId, name: &str) -> bool;
    fn create_text(&mut self, label: &TextLabel) -> Option<TextId>;
    fn insert_text(&mut self, board: BoardId, index: usize, text: TextId, name: &str);
}

/// Inserts a built chart into the host document: a board sized to the chart,
/// the imported SVG geometry, then one native text node per label.
///
/// When the host rejects the SVG the board is left empty; labels without
/// their geometry would be noise. A rejected individual text is skipped and
/// the rest are still inserted.
pub fn insert_chart<H: HostDocument>(
    host: &mut H,
    chart: &ChartResult,
    width: f64,
    height: f64,
) -> BoardId {
    let board = host.create_board(width, height);

    let Some(shape) = host.create_shape_from_svg(&chart.svg) else {
        tracing::debug!(width, height, "host rejected the chart svg, leaving the board empty");
        return board;
    };
    host.append_to_board(board, shape);
    host.ungroup(shape);
    host.remove_child_named(board, BACKGROUND_CHILD_NAME);

    for label in &chart.texts {
        let Some(text) = host.create_text(label) else {
            tracing::debug!(content = %label.content, "host rejected a chart label");
            continue;
        };
        host.insert_text(board, TEXT_INSERT_INDEX, text, &slugify(&label.content));
    }
    board
}

/// Shape name for an inserted label: the first ten characters, lowercased,
/// with each whitespace run collapsed to a dash.
pub fn slugify(text: &str) -> String {
    let head: String = text.chars().take(10).collect();
    let head = head.to_lowercase();
    let mut out = String::with_capacity(head.len());
    let mut in_gap = false;
    for ch in head.chars() {
        if ch.is_whitespace() {
            if !in_gap {
                out.push('-');
            }
            in_gap = true;
        } else {
            out.push(ch);
            in_gap = false;
        }
    }
    out
}
