//! End-to-end batch test: metadata directory in, map document out.

#![allow(clippy::unwrap_used)]

use std::fs;

use scriptref_core::{CannedProbe, HrefResolver, XREFMAP_MARKER, build_version_map};

const OBJECT_YML: &str = "\
### YamlMime:ManagedReference
items:
- uid: UnityEngine.Object
  commentId: T:UnityEngine.Object
  name: Object
  fullName: UnityEngine.Object
  nameWithType: Object
- uid: UnityEngine.Object.Instantiate(UnityEngine.Object)
  commentId: M:UnityEngine.Object.Instantiate(UnityEngine.Object)
  name: Instantiate(Object)
  fullName: UnityEngine.Object.Instantiate(UnityEngine.Object)
  nameWithType: Object.Instantiate(Object)
";

const TRANSFORM_YML: &str = "\
### YamlMime:ManagedReference
items:
- uid: UnityEngine.Transform.position
  commentId: P:UnityEngine.Transform.position
  name: position
  fullName: UnityEngine.Transform.position
  nameWithType: Transform.position
- uid: UnityEngine
  commentId: N:UnityEngine
  name: UnityEngine
  fullName: UnityEngine
  nameWithType: UnityEngine
";

#[tokio::test]
async fn metadata_directory_becomes_sorted_map() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("UnityEngine.Object.yml"), OBJECT_YML).unwrap();
    fs::write(dir.path().join("UnityEngine.Transform.yml"), TRANSFORM_YML).unwrap();
    fs::write(dir.path().join("toc.yml"), "- name: TOC\n").unwrap();

    let probe = CannedProbe::accepting(&[
        "https://docs.unity3d.com/2021.3/Documentation/ScriptReference/Object.html",
        "https://docs.unity3d.com/2021.3/Documentation/ScriptReference/Object.Instantiate.html",
        "https://docs.unity3d.com/2021.3/Documentation/ScriptReference/Transform-position.html",
    ]);
    let resolver = HrefResolver::new(probe, "https://docs.unity3d.com");

    let map = build_version_map(&resolver, dir.path(), "2021.3", 8)
        .await
        .unwrap()
        .expect("directory has entries");

    let uids: Vec<&str> = map.references.iter().map(|r| r.uid.as_str()).collect();
    assert_eq!(
        uids,
        vec![
            "UnityEngine",
            "UnityEngine.Object",
            "UnityEngine.Object.Instantiate(UnityEngine.Object)",
            "UnityEngine.Transform.position",
        ]
    );

    let by_uid = |uid: &str| {
        map.references
            .iter()
            .find(|r| r.uid == uid)
            .unwrap_or_else(|| panic!("missing {uid}"))
    };

    // Namespace entries land on the index page without probing.
    assert!(by_uid("UnityEngine").href.ends_with("/ScriptReference/index.html"));
    assert!(by_uid("UnityEngine.Object").href.ends_with("/Object.html"));
    // The property only exists under its hyphen spelling.
    assert!(
        by_uid("UnityEngine.Transform.position")
            .href
            .ends_with("/Transform-position.html")
    );
    // Display names lose their parameter lists.
    assert_eq!(
        by_uid("UnityEngine.Object.Instantiate(UnityEngine.Object)").name,
        "Instantiate"
    );

    let out = dir.path().join("out").join("2021.3").join("xrefmap.yml");
    map.write_to(&out).unwrap();
    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with(XREFMAP_MARKER));
    assert!(written.contains("sorted: true"));
}
