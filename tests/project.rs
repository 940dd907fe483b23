use rulu_ide_lib::models::{EntryIcon, EntryKind};
use rulu_ide_lib::services::Notification;


fn populate(root: &std::path::Path) {
    std::fs::create_dir(root.join("lib")).unwrap();
    std::fs::create_dir(root.join("assets.rulu.d")).unwrap();
    std::fs::write(root.join("lib").join("nested.rulu"), "").unwrap();
    std::fs::write(root.join("main.rulu"), "").unwrap();
    std::fs::write(root.join("notes.txt"), "").unwrap();
    std::fs::write(root.join("README.md"), "").unwrap();
    std::fs::write(root.join("rulu"), "").unwrap();
    std::fs::write(root.join("b.rulu"), "").unwrap();
}

#[tokio::test]
async fn test_get_files_keeps_directories_and_documents() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let bridge = fixture::bridge();
    let entries = bridge.get_files(Some(dir.path())).await;

    let names: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(names, ["assets.rulu.d", "b.rulu", "lib", "main.rulu"]);

    for entry in &entries {
        assert_eq!(entry.id, dir.path().join(&entry.text));
        match entry.kind {
            EntryKind::Directory => {
                assert!(entry.has_children);
                assert_eq!(entry.icon, EntryIcon::Folder);
            }
            EntryKind::File => {
                assert!(!entry.has_children);
                assert_eq!(entry.icon, EntryIcon::File);
            }
        }
    }
    assert_eq!(bridge.shell().directory_prompts(), 0);
    assert_eq!(
        bridge.shell().notifications(),
        vec![Notification::FilesList(entries)]
    );
}

#[tokio::test]
async fn test_get_files_is_one_level_deep() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let bridge = fixture::bridge();
    let entries = bridge.get_files(Some(dir.path())).await;
    assert!(entries.iter().all(|e| e.text != "nested.rulu"));
}

#[tokio::test]
async fn test_get_files_ids_are_not_canonicalized() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("a.rulu"), "").unwrap();
    let indirect = dir.path().join("sub").join("..");

    let bridge = fixture::bridge();
    let entries = bridge.get_files(Some(&indirect)).await;

    let file = entries.iter().find(|e| e.text == "a.rulu").unwrap();
    assert_eq!(file.id, indirect.join("a.rulu"));
}

#[tokio::test]
async fn test_get_files_without_directory_prompts() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let bridge = fixture::bridge();
    bridge.shell().answer_directory(Some(dir.path().to_path_buf()));

    let entries = bridge.get_files(None).await;
    assert_eq!(entries.len(), 4);
    assert_eq!(bridge.shell().directory_prompts(), 1);
}

#[tokio::test]
async fn test_get_files_cancelled_prompt_is_empty() {
    let bridge = fixture::bridge();
    bridge.shell().answer_directory(None);

    assert!(bridge.get_files(None).await.is_empty());
    assert!(bridge.shell().faults().is_empty());
    assert!(bridge.shell().notifications().is_empty());
}

#[tokio::test]
async fn test_get_files_unreadable_directory_reports_fault() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("deleted");

    let bridge = fixture::bridge();
    assert!(bridge.get_files(Some(&missing)).await.is_empty());

    let faults = bridge.shell().faults();
    assert_eq!(faults.len(), 1);
    assert!(faults[0].message.starts_with("Failed to read directory:"));
}

#[tokio::test]
async fn test_get_files_on_empty_directory() {
    let dir = tempfile::tempdir().unwrap();

    let bridge = fixture::bridge();
    assert!(bridge.get_files(Some(dir.path())).await.is_empty());
    assert!(bridge.shell().faults().is_empty());
}

#[tokio::test]
async fn test_open_project_returns_choice() {
    let dir = tempfile::tempdir().unwrap();

    let bridge = fixture::bridge();
    bridge.shell().answer_directory(Some(dir.path().to_path_buf()));

    assert_eq!(bridge.open_project().await, Some(dir.path().to_path_buf()));
    assert_eq!(
        bridge.shell().notifications(),
        vec![Notification::ProjectOpened(dir.path().to_path_buf())]
    );
}

#[tokio::test]
async fn test_open_project_cancelled() {
    let bridge = fixture::bridge();
    bridge.shell().answer_directory(None);

    assert_eq!(bridge.open_project().await, None);
    assert!(bridge.shell().notifications().is_empty());
}

#[tokio::test]
async fn test_get_files_with_empty_directory_prompts() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let bridge = fixture::bridge();
    bridge.shell().answer_directory(Some(dir.path().to_path_buf()));

    let entries = bridge.get_files(Some(std::path::Path::new(""))).await;

    assert_eq!(entries.len(), 4);
    assert_eq!(bridge.shell().directory_prompts(), 1);
    assert!(bridge.shell().faults().is_empty());
}

#[tokio::test]
async fn test_open_project_chooser_failure_reports_fault() {
    let bridge = fixture::bridge();
    bridge.shell().fail_directory("no display");

    assert_eq!(bridge.open_project().await, None);

    let faults = bridge.shell().faults();
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].message, "Failed to open project: no display");
    assert!(bridge.shell().notifications().is_empty());
}

#[tokio::test]
async fn test_get_files_chooser_failure_reports_fault() {
    let bridge = fixture::bridge();
    bridge.shell().fail_directory("no display");

    assert!(bridge.get_files(None).await.is_empty());

    let faults = bridge.shell().faults();
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].message, "Failed to read directory: no display");
}
