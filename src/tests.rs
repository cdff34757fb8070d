#[cfg(test)]
mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const TEST_UFO: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/rosette-test.ufo");

    /// Copies the test font somewhere it can be written to
    pub fn writable_font(dir: &Path) -> PathBuf {
        let target = dir.join("rosette-test.ufo");
        copy_dir(Path::new(TEST_UFO), &target);
        target
    }

    fn copy_dir(from: &Path, to: &Path) {
        fs::create_dir_all(to).unwrap();
        for entry in fs::read_dir(from).unwrap() {
            let entry = entry.unwrap();
            let destination = to.join(entry.file_name());
            if entry.file_type().unwrap().is_dir() {
                copy_dir(&entry.path(), &destination);
            } else {
                fs::copy(entry.path(), destination).unwrap();
            }
        }
    }
}

#[cfg(test)]
mod ufo_tests {
    use super::fixtures::TEST_UFO;
    use crate::data::ufo::{self, UfoGlyph};
    use crate::geometry::PointKind;
    use crate::host::GlyphHost;

    #[test]
    fn test_load_test_font() {
        let font = ufo::load_font(TEST_UFO).expect("Failed to load UFO file");

        assert_eq!(
            font.font_info.family_name.as_deref(),
            Some("Rosette Test"),
            "Family name should match"
        );
        assert!(font.default_layer().get_glyph("petal").is_some());
    }

    #[test]
    fn test_glyph_contours_convert() {
        let font = ufo::load_font(TEST_UFO).unwrap();
        let glyph = UfoGlyph::from_font(&font, "petal").unwrap();
        let outline = glyph.contours();

        assert_eq!(outline.len(), 1);
        let kinds: Vec<_> = outline.contours()[0].points.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PointKind::Line,
                PointKind::OffCurve,
                PointKind::OffCurve,
                PointKind::Curve,
                PointKind::Line
            ]
        );
    }

    #[test]
    fn test_missing_glyph_lists_available() {
        let font = ufo::load_font(TEST_UFO).unwrap();
        let err = UfoGlyph::from_font(&font, "dagger").unwrap_err();
        let message = err.to_string();

        assert!(message.contains("'dagger' not found"), "{message}");
        assert!(message.contains("asterisk, petal, space"), "{message}");
    }

    #[test]
    fn test_missing_font_is_an_error() {
        assert!(ufo::load_font("assets/fonts/no-such-font.ufo").is_err());
    }
}

#[cfg(test)]
mod host_tests {
    use super::fixtures::TEST_UFO;
    use crate::data::ufo::{self, UfoGlyph};
    use crate::editing::{ContourSelection, RotatorSession};
    use crate::host::GlyphHost;

    #[test]
    fn test_commit_and_undo_on_ufo_glyph() {
        let font = ufo::load_font(TEST_UFO).unwrap();
        let mut glyph = UfoGlyph::from_font(&font, "petal").unwrap();
        let mut session = RotatorSession::default();
        session.set_steps(6);

        session.commit(&mut glyph);
        assert_eq!(glyph.glyph().contours.len(), 6);
        // Copies are new contours and carry no identifiers
        assert!(glyph.glyph().contours[1..]
            .iter()
            .all(|contour| contour.identifier().is_none()));

        assert!(glyph.undo());
        assert_eq!(glyph.glyph().contours.len(), 1);
        assert_eq!(
            glyph.glyph().contours[0].identifier().map(|id| id.as_str()),
            Some("petal-outer")
        );

        assert!(glyph.redo());
        assert_eq!(glyph.glyph().contours.len(), 6);
    }

    #[test]
    fn test_selected_contour_only() {
        let font = ufo::load_font(TEST_UFO).unwrap();
        let mut glyph = UfoGlyph::from_font(&font, "asterisk")
            .unwrap()
            .with_selection(ContourSelection::from_indices([0]));
        let mut session = RotatorSession::default();
        session.set_steps(4);
        session.edit_pivot(300.0, 400.0).unwrap();

        let added = session.commit(&mut glyph);
        assert_eq!(added.len(), 3);
        assert_eq!(glyph.glyph().contours.len(), 2 + 3);
        assert!(added.iter().all(|contour| contour.points.len() == 4));
    }

    #[test]
    fn test_empty_glyph_gets_nothing() {
        let font = ufo::load_font(TEST_UFO).unwrap();
        let mut glyph = UfoGlyph::from_font(&font, "space").unwrap();

        let added = RotatorSession::default().commit(&mut glyph);
        assert!(added.is_empty());
        assert!(glyph.glyph().contours.is_empty());
        assert_eq!(glyph.history().len(), 1);
        assert!(!glyph.undo());
    }
}

#[cfg(test)]
mod closure_tests {
    use kurbo::Point;

    use crate::editing::compose;
    use crate::geometry::{Contour, Outline, OutlinePoint};

    fn leaf() -> Outline {
        Outline::new(vec![
            Contour::new(vec![
                OutlinePoint::line(310.0, 250.0),
                OutlinePoint::off(340.0, 273.0),
                OutlinePoint::off(381.0, 262.0),
                OutlinePoint::curve(402.0, 250.0, true),
                OutlinePoint::line(355.0, 229.0),
            ]),
            Contour::new(vec![
                OutlinePoint::line(420.0, 245.0),
                OutlinePoint::line(430.0, 245.0),
                OutlinePoint::line(425.0, 255.0),
            ]),
        ])
    }

    fn rotated(source: &Outline, degrees: f64, pivot: Point) -> Outline {
        let mut copy = source.clone();
        copy.rotate_about(degrees, pivot);
        copy
    }

    fn max_distance(a: &[Contour], b: &[Contour]) -> f64 {
        assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .flat_map(|(ca, cb)| ca.points.iter().zip(&cb.points))
            .map(|(pa, pb)| {
                (pa.position.x - pb.position.x)
                    .abs()
                    .max((pa.position.y - pb.position.y).abs())
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_each_copy_is_a_whole_number_of_steps_around() {
        let pivot = Point::new(250.0, 250.0);
        let source = leaf();

        for steps in [2, 3, 5, 8, 12, 24] {
            let result = compose(&source, pivot, steps, false);
            let per_copy = source.len();
            assert_eq!(result.len(), per_copy * (steps as usize - 1));

            for (i, copy) in result.contours().chunks(per_copy).enumerate() {
                let angle = (i + 1) as f64 * 360.0 / steps as f64;
                let expected = rotated(&source, angle, pivot);
                let distance = max_distance(copy, expected.contours());
                assert!(distance < 1e-9, "steps {steps}, copy {i}: off by {distance}");
            }
        }
    }

    #[test]
    fn test_one_more_step_closes_the_ring() {
        let pivot = Point::new(250.0, 250.0);
        let source = leaf();
        let steps = 7;
        let result = compose(&source, pivot, steps, false);

        let last = Outline::new(result.contours()[result.len() - source.len()..].to_vec());
        let closed = rotated(&last, 360.0 / f64::from(steps), pivot);
        assert!(max_distance(closed.contours(), source.contours()) < 1e-9);
    }

    #[test]
    fn test_rounded_copies_are_nearest_integers() {
        let pivot = Point::new(250.0, 250.0);
        let source = leaf();
        let steps = 9;
        let result = compose(&source, pivot, steps, true);

        for (i, copy) in result.contours().chunks(source.len()).enumerate() {
            let expected = rotated(&source, (i + 1) as f64 * 40.0, pivot);
            assert!(max_distance(copy, expected.contours()) <= 0.5 + 1e-9);
        }

        let mut again = result.clone();
        again.round();
        assert_eq!(again, result);
    }

    #[test]
    fn test_example_pivot_and_single_step() {
        let source = leaf();
        let pivot = Point::new(100.0, 50.0);
        let result = compose(&source, pivot, 1, false);

        assert_eq!(result.len(), source.len());
        let expected = rotated(&source, 90.0, pivot);
        assert!(max_distance(result.contours(), expected.contours()) < 1e-9);
    }
}

#[cfg(test)]
mod app_tests {
    use clap::Parser;

    use super::fixtures::writable_font;
    use crate::core::{run, CliArgs, RotatorSettings};
    use crate::data::ufo;

    fn cli(args: &[&str]) -> CliArgs {
        let mut argv = vec!["rosette"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_commits_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = writable_font(dir.path());
        let font_arg = font_path.to_str().unwrap();

        let summary = run(&cli(&[
            "--load-ufo", font_arg, "--glyph", "petal", "--steps", "5", "--round",
        ]))
        .unwrap();

        assert!(summary.committed);
        assert_eq!(summary.copies, 4);
        assert_eq!(summary.angle_label, "72");
        assert_eq!(summary.contours_added, 4);

        let font = ufo::load_font(&font_path).unwrap();
        let petal = font.default_layer().get_glyph("petal").unwrap();
        assert_eq!(petal.contours.len(), 5);
        assert!(petal.contours[1..]
            .iter()
            .flat_map(|contour| &contour.points)
            .all(|point| point.x == point.x.round() && point.y == point.y.round()));
    }

    #[test]
    fn test_dry_run_writes_preview_only() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = writable_font(dir.path());
        let preview_path = dir.path().join("preview.svg");

        let summary = run(&cli(&[
            "--load-ufo",
            font_path.to_str().unwrap(),
            "--glyph",
            "asterisk",
            "--steps",
            "3",
            "--x",
            "300",
            "--y",
            "410",
            "--dry-run",
            "--preview",
            preview_path.to_str().unwrap(),
        ]))
        .unwrap();

        assert!(!summary.committed);
        assert_eq!(summary.contours_added, 4);
        assert!(preview_path.exists());

        let font = ufo::load_font(&font_path).unwrap();
        let asterisk = font.default_layer().get_glyph("asterisk").unwrap();
        assert_eq!(asterisk.contours.len(), 2);
    }

    #[test]
    fn test_output_leaves_input_alone() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = writable_font(dir.path());
        let output_path = dir.path().join("out.ufo");

        run(&cli(&[
            "--load-ufo",
            font_path.to_str().unwrap(),
            "--glyph",
            "petal",
            "--steps",
            "0",
            "--output",
            output_path.to_str().unwrap(),
        ]))
        .unwrap();

        let original = ufo::load_font(&font_path).unwrap();
        let edited = ufo::load_font(&output_path).unwrap();
        assert_eq!(original.default_layer().get_glyph("petal").unwrap().contours.len(), 1);
        assert_eq!(edited.default_layer().get_glyph("petal").unwrap().contours.len(), 2);
    }

    #[test]
    fn test_remember_saves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = writable_font(dir.path());
        let config_path = dir.path().join("rosette.json");
        RotatorSettings {
            steps: 6,
            pivot_x: 250.0,
            ..RotatorSettings::default()
        }
        .save(&config_path)
        .unwrap();

        let summary = run(&cli(&[
            "--load-ufo",
            font_path.to_str().unwrap(),
            "--glyph",
            "petal",
            "--config",
            config_path.to_str().unwrap(),
            "--y",
            "-40",
            "--remember",
        ]))
        .unwrap();
        assert_eq!(summary.copies, 5);

        let saved = RotatorSettings::load(&config_path).unwrap();
        assert_eq!(saved.steps, 6);
        assert_eq!((saved.pivot_x, saved.pivot_y), (250.0, -40.0));
    }

    #[test]
    fn test_config_step_count_is_range_checked() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = writable_font(dir.path());
        let config_path = dir.path().join("rosette.json");
        std::fs::write(&config_path, r#"{ "steps": 2000000000 }"#).unwrap();

        let result = run(&cli(&[
            "--load-ufo",
            font_path.to_str().unwrap(),
            "--glyph",
            "petal",
            "--config",
            config_path.to_str().unwrap(),
        ]));
        assert!(result.is_err());

        let font = ufo::load_font(&font_path).unwrap();
        assert_eq!(font.default_layer().get_glyph("petal").unwrap().contours.len(), 1);
    }

    #[test]
    fn test_unknown_glyph_fails() {
        let dir = tempfile::tempdir().unwrap();
        let font_path = writable_font(dir.path());

        let result = run(&cli(&[
            "--load-ufo",
            font_path.to_str().unwrap(),
            "--glyph",
            "dagger",
        ]));
        assert!(result.is_err());
    }
}
