use boxing_store::{BoxerRepo, SqliteProvider};
use tempfile::TempDir;

/// Create a repository over a fresh SQLite file with the schema applied
///
/// The returned TempDir must be kept alive for the duration of the test.
#[allow(dead_code)]
pub fn setup_test_repo() -> (TempDir, BoxerRepo<SqliteProvider>) {
    let dir = tempfile::tempdir().unwrap();
    let provider = SqliteProvider::new(dir.path().join("boxing.db"));
    provider.initialize().unwrap();
    (dir, BoxerRepo::new(provider))
}

/// Seed the canonical fixture boxer and return its id
#[allow(dead_code)]
pub fn seed_ali(repo: &BoxerRepo<SqliteProvider>) -> i64 {
    repo.create_boxer("Ali", 180.0, 70.0, 72.5, 28).unwrap();
    repo.get_boxer_by_name("Ali").unwrap().id
}
