use assert_fs::TempDir;
use assert_fs::prelude::*;
use portable_fs::platform::to_canonical;
use portable_fs::{FileSystem, FsError, parent_directory};

fn canon(p: &std::path::Path) -> String {
    to_canonical(p.as_os_str())
}

#[test]
fn ensure_then_query_through_parent_chain() {
    let temp = TempDir::new().unwrap();
    let file = format!("{}/p/q/r/leaf.txt", canon(temp.path()));
    let fs_ = FileSystem::new();

    fs_.ensure_directory(parent_directory(&file)).unwrap();
    fs_.write_file(&file, b"hello").unwrap();

    assert!(fs_.path_exists(&file));
    assert!(!fs_.is_directory(&file));
    assert!(fs_.is_directory(parent_directory(&file)));
    assert_eq!(fs_.file_length(&file).unwrap(), 5);
    assert_eq!(fs_.file_length_u32(&file).unwrap(), 5);

    let info = fs_.file_info(&file).unwrap();
    assert!(info.exists && !info.is_directory);
    assert_eq!(info.size, 5);
    assert!(info.modified_time > 0);
}

#[test]
fn ensure_refuses_a_file_in_the_way() {
    let temp = TempDir::new().unwrap();
    temp.child("blocker").write_str("x").unwrap();
    let fs_ = FileSystem::new();

    let err = fs_.ensure_directory(&canon(temp.child("blocker").path())).unwrap_err();
    assert!(matches!(err, FsError::Occupied { .. }));

    // A file as an intermediate segment stops the chain too.
    let deeper = format!("{}/blocker/sub", canon(temp.path()));
    assert!(fs_.ensure_directory(&deeper).is_err());
}

#[test]
fn directory_info_has_zero_size_and_time() {
    let temp = TempDir::new().unwrap();
    let fs_ = FileSystem::new();
    let info = fs_.file_info(&canon(temp.path())).unwrap();
    assert!(info.is_directory);
    assert_eq!((info.size, info.modified_time), (0, 0));

    let err = fs_.file_length(&canon(temp.path())).unwrap_err();
    assert!(matches!(err, FsError::IsADirectory { .. }));
}

#[test]
fn file_segment_in_the_middle_reads_as_absent() {
    let temp = TempDir::new().unwrap();
    temp.child("plain").write_str("x").unwrap();
    let through_file = format!("{}/plain/child", canon(temp.path()));
    let fs_ = FileSystem::new();

    assert!(!fs_.path_exists(&through_file));
    assert!(!fs_.is_read_only(&through_file).unwrap());
    assert!(fs_.file_length(&through_file).unwrap_err().is_absent());
    assert!(!fs_.metadata(&through_file).exists);
}

#[cfg(unix)]
#[test]
fn read_only_reflects_owner_write_bit() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let f = temp.child("ro.txt");
    f.write_str("x").unwrap();
    let fs_ = FileSystem::new();
    let p = canon(f.path());

    assert!(!fs_.is_read_only(&p).unwrap());
    std::fs::set_permissions(f.path(), std::fs::Permissions::from_mode(0o444)).unwrap();
    assert!(fs_.is_read_only(&p).unwrap());
    assert!(fs_.file_info(&p).unwrap().read_only);
}

#[test]
fn touch_feeds_back_into_queries() {
    let temp = TempDir::new().unwrap();
    let f = temp.child("stamp");
    f.touch().unwrap();
    let fs_ = FileSystem::new();
    let p = canon(f.path());

    fs_.touch_file(&p, 86_400).unwrap();
    assert_eq!(fs_.file_info(&p).unwrap().modified_time, 86_400);
}
