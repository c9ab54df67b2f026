use super::*;
use std::path::PathBuf;

const LEGACY: &str = "
sheet.png
size: 256,128
format: RGBA8888
filter: Linear,Linear
repeat: none
bg
  rotate: false
  xy: 2, 2
  size: 100, 50
  orig: 100, 50
  offset: 0, 0
  index: -1
button
  rotate: false
  xy: 110, 2
  size: 40, 20
  orig: 40, 20
  offset: 0, 0
  index: 1
button
  rotate: false
  xy: 110, 30
  size: 40, 20
  orig: 40, 20
  offset: 0, 0
  index: 2
";

const MODERN: &str = "sheet.png
size:64,64
filter:Linear,Linear
pma:false
star
bounds:1,2,30,31
star
bounds:33,2,30,31
index:3
";

#[test]
fn parses_legacy_pack_layout() {
    let atlas = TextureAtlas::parse(LEGACY, "assets").unwrap();
    assert_eq!(atlas.len(), 3);

    let bg = atlas.find_region("bg").unwrap();
    assert_eq!((bg.x, bg.y, bg.width, bg.height), (2, 2, 100, 50));
    assert_eq!(bg.texture.path, PathBuf::from("assets").join("sheet.png"));
    assert_eq!((bg.texture.width, bg.texture.height), (256, 128));
    assert_eq!(atlas.regions()[0].index, None);
}

#[test]
fn parses_bounds_layout() {
    let atlas = TextureAtlas::parse(MODERN, ".").unwrap();
    assert_eq!(atlas.len(), 2);
    let star = atlas.find_region_indexed("star", 3).unwrap();
    assert_eq!((star.x, star.y, star.width, star.height), (33, 2, 30, 31));
}

#[test]
fn indexed_lookup_requires_matching_index() {
    let atlas = TextureAtlas::parse(LEGACY, ".").unwrap();
    let b2 = atlas.find_region_indexed("button", 2).unwrap();
    assert_eq!(b2.y, 30);
    assert!(atlas.find_region_indexed("button", 7).is_none());
    assert!(atlas.find_region_indexed("bg", 0).is_none());
}

#[test]
fn plain_lookup_returns_first_entry() {
    let atlas = TextureAtlas::parse(LEGACY, ".").unwrap();
    let first = atlas.find_region("button").unwrap();
    assert_eq!(first.y, 2);
    assert!(atlas.find_region("missing").is_none());
}

#[test]
fn lookups_share_the_same_entry() {
    let atlas = TextureAtlas::parse(LEGACY, ".").unwrap();
    let a = atlas.find_region("bg").unwrap();
    let b = atlas.find_region("bg").unwrap();
    assert!(a.ptr_eq(&b));
}

#[test]
fn multiple_pages_are_separated_by_blank_lines() {
    let text = "a.png\nsize: 8,8\none\n  xy: 0, 0\n  size: 4, 4\n\nb.png\nsize: 16,16\ntwo\n  xy: 1, 1\n  size: 2, 2\n";
    let atlas = TextureAtlas::parse(text, ".").unwrap();
    let one = atlas.find_region("one").unwrap();
    let two = atlas.find_region("two").unwrap();
    assert!(one.texture.path.ends_with("a.png"));
    assert!(two.texture.path.ends_with("b.png"));
    assert_eq!(two.texture.width, 16);
}

#[test]
fn rejects_malformed_numbers() {
    let text = "a.png\nsize: 8,8\none\n  xy: zero, 0\n";
    let err = TextureAtlas::parse(text, ".").unwrap_err();
    assert!(err.to_string().contains("line 4"));
}

#[test]
fn manual_atlas_building() {
    let mut atlas = TextureAtlas::new();
    assert!(atlas.is_empty());
    let tex = Arc::new(Texture {
        path: PathBuf::from("p.png"),
        width: 10,
        height: 10,
    });
    atlas.add_region("dot", None, TextureRegion::whole(tex));
    assert_eq!(atlas.find_region("dot").unwrap().width, 10);
}

#[test]
fn rejects_index_beyond_i32() {
    let text = "a.png\nsize: 64,64\nstar\n  xy: 0, 0\n  size: 8, 8\n  index: 4294967298\n";
    let err = TextureAtlas::parse(text, ".").unwrap_err();
    assert!(err.to_string().contains("line 6"));
    assert!(err.to_string().contains("out of range"));
}
