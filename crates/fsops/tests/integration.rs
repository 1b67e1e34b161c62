//! Integration tests for fsops crate

#[cfg(test)]
mod tests {
    use fixstage_fsops::*;
    use tempfile::tempdir;
    use tokio::fs;

    #[tokio::test]
    async fn test_copy_directory() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");

        // Create source structure
        fs::create_dir_all(&src.join("nested/deep")).await.unwrap();
        fs::write(src.join("root.txt"), b"root").await.unwrap();
        fs::write(src.join("nested/mid.txt"), b"middle")
            .await
            .unwrap();
        fs::write(src.join("nested/deep/deep.txt"), b"deep")
            .await
            .unwrap();

        // Copy
        copy_directory(&src, &dst).await.unwrap();

        // Verify all files copied
        assert_eq!(fs::read(dst.join("root.txt")).await.unwrap(), b"root");
        assert_eq!(
            fs::read(dst.join("nested/mid.txt")).await.unwrap(),
            b"middle"
        );
        assert_eq!(
            fs::read(dst.join("nested/deep/deep.txt")).await.unwrap(),
            b"deep"
        );
    }

    #[tokio::test]
    async fn test_copy_file_overwrites() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("in.txt");
        let dst = temp.path().join("out.txt");

        fs::write(&src, b"fresh").await.unwrap();
        fs::write(&dst, b"stale").await.unwrap();

        copy_file(&src, &dst).await.unwrap();

        assert_eq!(fs::read(&dst).await.unwrap(), b"fresh");
    }

    #[tokio::test]
    async fn test_remove_path_directory() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("tree");

        fs::create_dir_all(dir.join("sub")).await.unwrap();
        fs::write(dir.join("sub/file.txt"), b"content")
            .await
            .unwrap();

        remove_path(&dir).await.unwrap();
        assert!(!exists(&dir).await);
    }

    #[tokio::test]
    async fn test_remove_path_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("file.txt");

        fs::write(&file, b"content").await.unwrap();

        remove_path(&file).await.unwrap();
        assert!(!exists(&file).await);
    }

    #[tokio::test]
    async fn test_remove_path_missing_is_noop() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("never-created");

        remove_path(&missing).await.unwrap();
        remove_path(&missing).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_dir_all_nested() {
        let temp = tempdir().unwrap();
        let deep = temp.path().join("a/b/c");

        create_dir_all(&deep).await.unwrap();
        assert!(exists(&deep).await);
    }
}
