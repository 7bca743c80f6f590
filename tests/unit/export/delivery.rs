use super::*;

fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("thumbsmith-{tag}-{}", std::process::id()))
}

#[test]
fn directory_delivery_creates_the_directory_and_writes() {
    let dir = scratch_dir("delivery").join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let d = DirectoryDelivery::new(&dir);

    d.deliver("a.png", b"abc").unwrap();
    assert_eq!(std::fs::read(dir.join("a.png")).unwrap(), b"abc");
    assert_eq!(d.path_for("a.png"), dir.join("a.png"));

    let _ = std::fs::remove_dir_all(scratch_dir("delivery"));
}

#[test]
fn directory_delivery_refuses_path_like_names() {
    let d = DirectoryDelivery::new(scratch_dir("names"));
    assert!(d.deliver("../escape.png", b"x").is_err());
    assert!(d.deliver("", b"x").is_err());
}

#[test]
fn in_memory_delivery_keeps_order() {
    let d = InMemoryDelivery::new();
    assert!(d.is_empty());
    d.deliver("one.png", &[1]).unwrap();
    d.deliver("two.png", &[2, 2]).unwrap();
    let files = d.files();
    assert_eq!(d.len(), 2);
    assert_eq!(files[0], ("one.png".to_owned(), vec![1]));
    assert_eq!(files[1].0, "two.png");
}
