
pub use self::test_files::TestFiles;
pub use self::test_resource_fs::MockResourceFs;
