use penplot::host::{
    BACKGROUND_CHILD_NAME, BoardId, HostDocument, ShapeId, TextId, insert_chart, slugify,
};
use penplot::message::{ChartDimensions, PluginMessage, handle_message};
use penplot::{ChartResult, TextLabel, build_chart_json};

/// Records every host call so tests can assert on the exact insertion order.
#[derive(Default)]
struct RecordingHost {
    next_id: u64,
    reject_svg: bool,
    reject_texts: bool,
    boards: Vec<(BoardId, f64, f64)>,
    svgs: Vec<String>,
    appended: Vec<(BoardId, ShapeId)>,
    ungrouped: Vec<ShapeId>,
    removed: Vec<(BoardId, String)>,
    texts: Vec<(BoardId, usize, String)>,
}

impl RecordingHost {
    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl HostDocument for RecordingHost {
    fn create_board(&mut self, width: f64, height: f64) -> BoardId {
        let board = BoardId(self.next());
        self.boards.push((board, width, height));
        board
    }

    fn create_shape_from_svg(&mut self, svg: &str) -> Option<ShapeId> {
        if self.reject_svg {
            return None;
        }
        self.svgs.push(svg.to_string());
        Some(ShapeId(self.next()))
    }

    fn append_to_board(&mut self, board: BoardId, shape: ShapeId) {
        self.appended.push((board, shape));
    }

    fn ungroup(&mut self, shape: ShapeId) {
        self.ungrouped.push(shape);
    }

    fn remove_child_named(&mut self, board: BoardId, name: &str) -> bool {
        self.removed.push((board, name.to_string()));
        true
    }

    fn create_text(&mut self, _label: &TextLabel) -> Option<TextId> {
        if self.reject_texts {
            return None;
        }
        Some(TextId(self.next()))
    }

    fn insert_text(&mut self, board: BoardId, index: usize, _text: TextId, name: &str) {
        self.texts.push((board, index, name.to_string()));
    }
}

fn bar_chart() -> ChartResult {
    let payload = r#"{
        "type": "bar",
        "data": [
            { "name": "Apples", "value": 10 },
            { "name": "Bananas", "value": 20 }
        ]
    }"#;
    build_chart_json(payload).unwrap()
}

#[test]
fn insert_chart_builds_the_full_board() {
    let mut host = RecordingHost::default();
    let chart = bar_chart();
    let board = insert_chart(&mut host, &chart, 600.0, 400.0);

    assert_eq!(host.boards, vec![(board, 600.0, 400.0)]);
    assert_eq!(host.svgs.len(), 1);
    assert!(host.svgs[0].starts_with("<svg "));

    let shape = host.appended[0].1;
    assert_eq!(host.appended, vec![(board, shape)]);
    assert_eq!(host.ungrouped, vec![shape]);
    assert_eq!(host.removed, vec![(board, BACKGROUND_CHILD_NAME.to_string())]);

    // One text per value label, all at index 1, named by slug.
    assert_eq!(host.texts.len(), 2);
    for (text_board, index, _) in &host.texts {
        assert_eq!(*text_board, board);
        assert_eq!(*index, 1);
    }
    assert_eq!(host.texts[0].2, "10");
    assert_eq!(host.texts[1].2, "20");
}

#[test]
fn rejected_svg_leaves_the_board_empty() {
    let mut host = RecordingHost {
        reject_svg: true,
        ..RecordingHost::default()
    };
    let chart = bar_chart();
    insert_chart(&mut host, &chart, 600.0, 400.0);

    assert_eq!(host.boards.len(), 1);
    assert!(host.appended.is_empty());
    assert!(host.ungrouped.is_empty());
    assert!(host.removed.is_empty());
    assert!(host.texts.is_empty());
}

#[test]
fn rejected_texts_do_not_stop_the_geometry() {
    let mut host = RecordingHost {
        reject_texts: true,
        ..RecordingHost::default()
    };
    let chart = bar_chart();
    insert_chart(&mut host, &chart, 600.0, 400.0);

    assert_eq!(host.appended.len(), 1);
    assert!(host.texts.is_empty());
}

#[test]
fn create_chart_message_drives_the_insertion() {
    let chart = bar_chart();
    let message = PluginMessage::create_chart(chart, 600.0, 400.0);
    let json = message.to_json().unwrap();
    assert!(json.contains(r#""type":"create-chart""#));
    assert!(json.contains(r#""dimensions":{"width":600.0,"height":400.0}"#));

    let parsed = PluginMessage::from_json(&json).unwrap();
    let mut host = RecordingHost::default();
    handle_message(&mut host, &parsed);

    assert_eq!(host.boards.len(), 1);
    assert_eq!(host.boards[0].1, 600.0);
    assert_eq!(host.texts.len(), 2);
}

#[test]
fn theme_messages_do_not_touch_the_document() {
    let mut host = RecordingHost::default();
    let message = PluginMessage::theme("dark");
    handle_message(&mut host, &message);
    assert!(host.boards.is_empty());

    let json = message.to_json().unwrap();
    assert!(json.contains(r#""type":"theme""#));
    let PluginMessage::Theme { content } = PluginMessage::from_json(&json).unwrap() else {
        panic!("round trip changed the variant");
    };
    assert_eq!(content, "dark");
}

#[test]
fn dimensions_survive_the_wire() {
    let dims = ChartDimensions {
        width: 450.0,
        height: 450.0,
    };
    let json = serde_json::to_string(&dims).unwrap();
    assert_eq!(json, r#"{"width":450.0,"height":450.0}"#);
}

#[test]
fn slugify_truncates_lowercases_and_dashes() {
    assert_eq!(slugify("Hello World Chart"), "hello-worl");
    assert_eq!(slugify("A B"), "a-b");
    assert_eq!(slugify("Short"), "short");
    assert_eq!(slugify("tabs\t and  runs"), "tabs-and-");
    assert_eq!(slugify(""), "");
}
