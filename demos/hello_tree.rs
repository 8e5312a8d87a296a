use tracing_subscriber::EnvFilter;
use vfs_path_kit::{
    DirNode, MapNode, PathNode, build_url, common_ancestors, ensure_directory_path,
    relative_path,
};

fn main() -> vfs_path_kit::Result<()> {
    // RUST_LOG=debug shows every container the materializer creates
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // in-memory tree: R/A/X and R/B
    let root = MapNode::new_root("R");
    let x = ensure_directory_path(&root, "A/X")?;
    let b = ensure_directory_path(&root, "B")?;

    // a second call finds everything in place and creates nothing
    assert_eq!(ensure_directory_path(&root, "A/X")?, x);

    println!("{} -> {}: {:?}", x.path(), b.path(), relative_path(&x, &b, '/'));

    // nodes from two unrelated trees give one ancestor per tree
    let other = MapNode::new_root("Q");
    let p = ensure_directory_path(&other, "P/1")?;
    for ancestor in common_ancestors([&x, &b, &p]) {
        println!("common ancestor: {:?}", ancestor);
    }

    // the same algorithms against a real directory
    let tmp = std::env::temp_dir().join("vfs_path_kit_demo");
    let disk = DirNode::open(&tmp)?;
    let docs = ensure_directory_path(&disk, "docs/2024")?;
    println!(
        "created {} ({})",
        build_url("file", &docs.host_path().to_string_lossy(), false),
        docs.name()
    );

    std::fs::remove_dir_all(&tmp)?;
    Ok(())
}
