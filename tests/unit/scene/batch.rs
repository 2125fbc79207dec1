use super::*;

use image::{Rgb, Rgba};

fn white_bg(w: u32, h: u32) -> ImageInput {
    ImageInput::from(RgbImage::from_pixel(w, h, Rgb([255, 255, 255])))
}

fn cutout() -> RgbaImage {
    RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]))
}

fn jobs_with_one_missing() -> Vec<SceneJob> {
    let table = LayoutTable::canonical();
    vec![
        SceneJob {
            layout: *table.get(SceneKind::Wall),
            background: white_bg(100, 100),
            output: None,
        },
        SceneJob {
            layout: *table.get(SceneKind::Door),
            background: ImageInput::Path(PathBuf::from("/no/such/Base_door.jpg")),
            output: None,
        },
        SceneJob {
            layout: *table.get(SceneKind::Package),
            background: white_bg(200, 160),
            output: None,
        },
    ]
}

#[test]
fn failed_scene_does_not_abort_siblings() {
    let outcomes =
        render_scenes(&cutout(), &jobs_with_one_missing(), &SceneThreading::default()).unwrap();
    let scenes: Vec<_> = outcomes.iter().map(|o| o.scene).collect();
    assert_eq!(
        scenes,
        vec![SceneKind::Wall, SceneKind::Door, SceneKind::Package]
    );
    assert!(outcomes[0].result.is_ok());
    assert!(matches!(
        outcomes[1].result,
        Err(PapercutError::ResourceMissing(_))
    ));
    assert!(outcomes[2].result.is_ok());
}

#[test]
fn parallel_matches_sequential() {
    let jobs = jobs_with_one_missing();
    let seq = render_scenes(&cutout(), &jobs, &SceneThreading::default()).unwrap();
    let par = render_scenes(
        &cutout(),
        &jobs,
        &SceneThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();
    assert_eq!(seq.len(), par.len());
    for (a, b) in seq.iter().zip(&par) {
        assert_eq!(a.scene, b.scene);
        match (&a.result, &b.result) {
            (Ok(x), Ok(y)) => assert_eq!(x, y),
            (Err(_), Err(_)) => {}
            _ => panic!("outcome mismatch for {}", a.scene),
        }
    }
}

#[test]
fn zero_threads_is_rejected() {
    let err = render_scenes(
        &cutout(),
        &[],
        &SceneThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, PapercutError::InvalidParameter(_)));
}

#[test]
fn jobs_from_assets_use_canonical_file_names() {
    let jobs = SceneJob::from_assets(
        &LayoutTable::canonical(),
        std::path::Path::new("assets"),
        &SceneKind::ALL,
    );
    assert_eq!(jobs.len(), 4);
    match &jobs[3].background {
        ImageInput::Path(p) => assert_eq!(p, &PathBuf::from("assets/Base_package.jpg")),
        other => panic!("unexpected background {other:?}"),
    }
}

#[test]
fn outputs_are_written_when_requested() {
    let dir = std::env::temp_dir().join(format!("papercut_batch_{}", std::process::id()));
    let out = dir.join("nested").join("wall_1.png");
    let jobs = vec![SceneJob {
        layout: SceneLayout::canonical(SceneKind::Wall),
        background: white_bg(50, 50),
        output: Some(out.clone()),
    }];
    let outcomes = render_scenes(&cutout(), &jobs, &SceneThreading::default()).unwrap();
    assert!(outcomes[0].result.is_ok());
    let written = image::open(&out).unwrap().to_rgb8();
    assert_eq!(written.dimensions(), (50, 50));
    let _ = std::fs::remove_dir_all(&dir);
}
