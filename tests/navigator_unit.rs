//! Tests for the virtual filesystem navigator.

use portfolio_term::fs::{FsNode, NavError, Navigator, NodeKind, OpenOutcome};

fn portfolio() -> FsNode {
    FsNode::dir(
        "portfolio",
        vec![
            FsNode::dir(".git", vec![FsNode::file("HEAD", 21)]),
            FsNode::file("readme.txt", 120),
            FsNode::dir(
                "projects",
                vec![
                    FsNode::dir("web", vec![FsNode::file("index.html", 512)]),
                    FsNode::dir("cli", vec![]),
                    FsNode::file("notes.md", 64),
                ],
            ),
            FsNode::file(".gitignore", 10),
            FsNode::dir("images", vec![FsNode::file("face.png", 2048)]),
        ],
    )
}

fn names(nav: &Navigator) -> Vec<String> {
    nav.list_current_directory()
        .iter()
        .map(|n| n.name.clone())
        .collect()
}

// ==================== Tree Loading ====================

#[test]
fn test_tree_from_backend_json() {
    let json = r#"{
        "name": "portfolio", "type": "dir", "path": "/",
        "children": [
            {"name": "a.txt", "type": "file", "path": "/a.txt", "size": 5},
            {"name": "docs", "type": "dir", "path": "/docs", "children": []},
            {"name": "empty", "type": "dir", "path": "/empty"}
        ]
    }"#;
    let root = FsNode::from_json(json).unwrap();
    assert_eq!(root.kind, NodeKind::Dir);
    assert_eq!(root.children[0].size, 5);
    assert!(root.children[2].children.is_empty());

    let nav = Navigator::new(root).unwrap();
    assert_eq!(names(&nav), vec!["a.txt", "docs", "empty"]);
}

#[test]
fn test_duplicate_siblings_rejected() {
    let root = FsNode::dir(
        "root",
        vec![FsNode::file("a.txt", 1), FsNode::file("a.txt", 2)],
    );
    assert!(matches!(Navigator::new(root), Err(NavError::InvalidTree(_))));
}

#[test]
fn test_file_with_children_rejected() {
    let mut file = FsNode::file("a.txt", 1);
    file.children.push(FsNode::file("b.txt", 1));
    let root = FsNode::dir("root", vec![file]);
    assert!(matches!(Navigator::new(root), Err(NavError::InvalidTree(_))));
}

// ==================== Resolve ====================

#[test]
fn test_resolve_root() {
    let nav = Navigator::new(portfolio()).unwrap();
    assert_eq!(nav.resolve("/").map(|n| n.name.as_str()), Some("portfolio"));
    assert_eq!(nav.resolve("").map(|n| n.name.as_str()), Some("portfolio"));
}

#[test]
fn test_resolve_missing_segment() {
    let nav = Navigator::new(portfolio()).unwrap();
    assert!(nav.resolve("/projects/nope").is_none());
    assert!(nav.resolve("/nope/web").is_none());
    assert_eq!(
        nav.resolve("/projects//web/").map(|n| n.name.as_str()),
        Some("web")
    );
}

// ==================== Change Directory ====================

#[test]
fn test_cd_parent_at_root_is_idempotent() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    nav.change_directory("..").unwrap();
    assert_eq!(nav.current_path(), "/");
    nav.change_directory("..").unwrap();
    assert_eq!(nav.current_path(), "/");
}

#[test]
fn test_cd_relative_and_absolute() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    nav.change_directory("projects").unwrap();
    assert_eq!(nav.current_path(), "/projects");
    nav.change_directory("web").unwrap();
    assert_eq!(nav.current_path(), "/projects/web");
    nav.change_directory("/images").unwrap();
    assert_eq!(nav.current_path(), "/images");
    nav.change_directory("/").unwrap();
    assert_eq!(nav.current_path(), "/");
}

#[test]
fn test_cd_missing_leaves_state_unchanged() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    nav.change_directory("projects").unwrap();
    nav.select(2);

    let err = nav.change_directory("missing").unwrap_err();
    assert_eq!(err.to_string(), "The system cannot find the path specified.");
    assert_eq!(nav.current_path(), "/projects");
    assert_eq!(nav.selected_index(), 2);
}

#[test]
fn test_cd_round_trip_restores_selection() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    // Filtered root listing: readme.txt, projects, images
    for (index, name) in [(1, "projects"), (2, "images")] {
        nav.change_directory(name).unwrap();
        nav.change_directory("..").unwrap();
        assert_eq!(nav.current_path(), "/");
        assert_eq!(nav.selected_index(), index);
    }
}

#[test]
fn test_cd_into_hidden_dir_restores_zero() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    nav.change_directory(".git").unwrap();
    nav.change_directory("..").unwrap();
    assert_eq!(nav.selected_index(), 0);
}

// ==================== Listing & Selection ====================

#[test]
fn test_listing_excludes_git_entries() {
    let nav = Navigator::new(portfolio()).unwrap();
    assert_eq!(names(&nav), vec!["readme.txt", "projects", "images"]);
}

#[test]
fn test_select_next_wraps() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    let count = nav.list_current_directory().len();
    for _ in 0..count {
        nav.select_next();
    }
    assert_eq!(nav.selected_index(), 0);
}

#[test]
fn test_select_previous_wraps() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    nav.select_previous();
    assert_eq!(nav.selected_index(), 2);
    nav.select_previous();
    assert_eq!(nav.selected_index(), 1);
}

#[test]
fn test_selection_on_empty_directory() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    nav.change_directory("/projects/cli").unwrap();
    nav.select_next();
    nav.select_previous();
    assert_eq!(nav.selected_index(), 0);
    assert!(nav.selected().is_none());
    assert_eq!(nav.open_selected().unwrap(), OpenOutcome::Nothing);
}

// ==================== Open / Close ====================

#[test]
fn test_open_and_close_selected() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    nav.select(1);
    assert_eq!(nav.open_selected().unwrap(), OpenOutcome::Entered);
    assert_eq!(nav.current_path(), "/projects");

    nav.select(2);
    assert_eq!(
        nav.open_selected().unwrap(),
        OpenOutcome::OpenFile {
            name: "notes.md".to_string(),
            path: "/projects/notes.md".to_string(),
        }
    );

    nav.close_selected().unwrap();
    assert_eq!(nav.current_path(), "/");
    assert_eq!(nav.selected_index(), 1);

    nav.close_selected().unwrap();
    assert_eq!(nav.current_path(), "/");
}

#[test]
fn test_dos_path() {
    let mut nav = Navigator::new(portfolio()).unwrap();
    assert_eq!(nav.dos_path(), "C:\\");
    nav.change_directory("projects\\web").unwrap();
    assert_eq!(nav.dos_path(), "C:\\projects\\web");
}
