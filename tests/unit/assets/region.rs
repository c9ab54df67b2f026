use super::*;

fn page() -> Arc<Texture> {
    Arc::new(Texture {
        path: PathBuf::from("sheet.png"),
        width: 128,
        height: 64,
    })
}

#[test]
fn whole_region_covers_texture() {
    let r = TextureRegion::whole(page());
    assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 128, 64));
    assert_eq!(r.size(), Size::new(128.0, 64.0));
}

#[test]
fn owned_flip_toggles_in_place() {
    let mut r = OwnedRegion::new(TextureRegion::whole(page()));
    r.flip(true, false);
    assert!(r.flip_x);
    assert!(!r.flip_y);
    r.flip(true, true);
    assert!(!r.flip_x);
    assert!(r.flip_y);
}

#[test]
fn shared_flipped_copy_leaves_original_alone() {
    let shared = SharedRegion::new(Arc::new(TextureRegion::whole(page())));
    let copy = shared.flipped_copy(true, true);
    assert!(copy.flip_x && copy.flip_y);
    assert!(!shared.flip_x && !shared.flip_y);
    assert!(Arc::ptr_eq(&copy.texture, &shared.texture));
}

#[test]
fn region_enum_derefs_to_inner() {
    let shared = Region::Shared(SharedRegion::new(Arc::new(TextureRegion::whole(page()))));
    assert!(shared.is_shared());
    assert_eq!(shared.width, 128);

    let owned = Region::Owned(OwnedRegion::new(TextureRegion::whole(page())));
    assert!(!owned.is_shared());
    assert_eq!(owned.height, 64);
}

#[test]
fn load_reports_missing_file() {
    let err = Texture::load("definitely/not/here.png").unwrap_err();
    assert!(err.to_string().contains("asset error:"));
}
