use std::fs;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use portable_fs::platform::to_canonical;
use portable_fs::{FileSystem, FsError};

#[test]
fn removes_nested_tree_including_root() {
    let temp = TempDir::new().unwrap();
    let root = temp.child("victim");
    root.child("one/two/three/f.bin").write_binary(&[0u8; 64]).unwrap();
    root.child("one/g").touch().unwrap();
    root.child("empty").create_dir_all().unwrap();

    let fs_ = FileSystem::new();
    let path = to_canonical(root.path().as_os_str());
    fs_.delete_recursive(&path).unwrap();
    assert!(!fs_.path_exists(&path));
    assert!(temp.path().exists());
}

#[test]
fn single_file_is_deleted() {
    let temp = TempDir::new().unwrap();
    let f = temp.child("lone");
    f.write_str("x").unwrap();
    FileSystem::new().delete_recursive(&to_canonical(f.path().as_os_str())).unwrap();
    assert!(!f.path().exists());
}

#[test]
fn missing_path_reports_absence() {
    let temp = TempDir::new().unwrap();
    let err = FileSystem::new()
        .delete_recursive(&to_canonical(temp.child("ghost").path().as_os_str()))
        .unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));
}

#[cfg(unix)]
#[test]
fn read_only_files_inside_the_tree_are_removed() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let root = temp.child("ro");
    root.child("locked.txt").write_str("keep?").unwrap();
    fs::set_permissions(root.child("locked.txt").path(), fs::Permissions::from_mode(0o444)).unwrap();

    FileSystem::new()
        .delete_recursive(&to_canonical(root.path().as_os_str()))
        .unwrap();
    assert!(!root.path().exists());
}

#[cfg(unix)]
#[test]
fn links_are_removed_not_followed() {
    let temp = TempDir::new().unwrap();
    let outside = temp.child("outside");
    outside.child("precious").write_str("data").unwrap();
    let root = temp.child("tree");
    root.create_dir_all().unwrap();
    std::os::unix::fs::symlink(outside.path(), root.path().join("to_outside")).unwrap();
    std::os::unix::fs::symlink(outside.child("precious").path(), root.path().join("to_file")).unwrap();

    FileSystem::new()
        .delete_recursive(&to_canonical(root.path().as_os_str()))
        .unwrap();
    assert!(!root.path().exists());
    assert_eq!(fs::read_to_string(outside.child("precious").path()).unwrap(), "data");
}

#[cfg(unix)]
#[test]
fn deleting_a_link_to_a_directory_keeps_the_target() {
    let temp = TempDir::new().unwrap();
    let target = temp.child("target");
    target.child("inside").touch().unwrap();
    let link = temp.path().join("link");
    std::os::unix::fs::symlink(target.path(), &link).unwrap();

    FileSystem::new().delete_recursive(&to_canonical(link.as_os_str())).unwrap();
    assert!(fs::symlink_metadata(&link).is_err());
    assert!(target.child("inside").path().exists());
}

#[cfg(unix)]
#[test]
fn trailing_separator_on_a_directory_link_removes_only_the_link() {
    let temp = TempDir::new().unwrap();
    let target = temp.child("target");
    target.child("precious").write_str("data").unwrap();
    let link = temp.path().join("link");
    std::os::unix::fs::symlink(target.path(), &link).unwrap();

    let with_slash = format!("{}/", to_canonical(link.as_os_str()));
    FileSystem::new().delete_recursive(&with_slash).unwrap();
    assert!(fs::symlink_metadata(&link).is_err(), "link should be removed");
    assert_eq!(fs::read_to_string(target.child("precious").path()).unwrap(), "data");
}

#[test]
fn trailing_separator_on_a_directory_is_tolerated() {
    let temp = TempDir::new().unwrap();
    let root = temp.child("slashed");
    root.child("inner/f").touch().unwrap();

    FileSystem::new()
        .delete_recursive(&format!("{}/", to_canonical(root.path().as_os_str())))
        .unwrap();
    assert!(!root.path().exists());
}
