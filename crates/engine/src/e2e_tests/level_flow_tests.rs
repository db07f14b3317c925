//! Level load, probe and create flows over real directories.

use super::*;
use crate::infrastructure::ports::Diagnostic;
use crate::use_cases::level::LevelError;

#[test]
fn loads_current_format_level_from_data_dir() {
    let ctx = E2ETestContext::new();
    ctx.write_data(
        "levels/world1/forest.stl",
        &current_level(
            "Forest",
            Some("CC-BY-SA 4.0 International"),
            &[
                r#"(name "main") (music "forest.ogg") (tilemap (solid #t)) (coin) (coin) (snowball)"#,
                r#"(name "secret") (secretarea (name "hidden")) (heavycoin)"#,
            ],
        ),
    );

    let level = ctx
        .app
        .use_cases
        .level
        .load
        .from_file("levels/world1/forest.stl", false)
        .unwrap();

    assert_eq!(level.filename(), "levels/world1/forest.stl");
    assert_eq!(level.name(), "Forest");
    assert_eq!(level.author(), "Tux");
    assert_eq!(level.sector_names(), vec!["main", "secret"]);
    assert_eq!(level.sector("main").unwrap().music(), Some("forest.ogg"));
    assert_eq!(level.stats().total_coins(), 3);
    assert_eq!(level.stats().total_badguys(), 1);
    assert_eq!(level.stats().total_secrets(), 1);
    assert!(ctx.diagnostics.recorded().is_empty());
}

#[test]
fn created_level_survives_a_round_trip() {
    let ctx = E2ETestContext::new();
    ctx.write_data("levels/mine/level1.stl", "(supertux-level)");
    ctx.write_user("levels/mine/level2.stl", "(supertux-level)");

    let created = ctx.app.use_cases.level.create.level("levels/mine");
    assert_eq!(created.filename(), "level3.stl");
    assert_eq!(created.name(), "Level 3");

    let document = format!(
        "(supertux-level (version 2) (name \"{}\") (license \"{}\") (tileset \"{}\") (sector (name \"{}\")))",
        created.name(),
        created.license(),
        created.tileset(),
        created.sector_names()[0],
    );
    ctx.write_user("levels/mine/level3.stl", &document);

    let loaded = ctx
        .app
        .use_cases
        .level
        .load
        .from_file("levels/mine/level3.stl", true)
        .unwrap();

    assert_eq!(loaded.name(), created.name());
    assert_eq!(loaded.license(), created.license());
    assert_eq!(loaded.tileset(), created.tileset());
    assert_eq!(loaded.sector_count(), created.sector_count());
}

#[test]
fn new_worldmap_picks_next_free_name() {
    let ctx = E2ETestContext::new();
    let create = &ctx.app.use_cases.level.create;

    assert_eq!(create.worldmap("maps", "Forest").filename(), "worldmap.stwm");

    ctx.write_data("maps/worldmap.stwm", "");
    ctx.write_user("maps/worldmap1.stwm", "");
    let level = create.worldmap("maps", "Forest");

    assert_eq!(level.filename(), "worldmap2.stwm");
    assert_eq!(level.name(), "Forest");
    assert_eq!(level.tileset(), "images/worldmap.strf");
}

#[test]
fn nonexistent_path_is_wrapped_with_path_and_cause() {
    let ctx = E2ETestContext::new();

    let err = ctx
        .app
        .use_cases
        .level
        .load
        .from_file("levels/missing.stl", false)
        .unwrap_err();

    assert!(matches!(err, LevelError::Read { .. }));
    let message = err.to_string();
    assert!(message.starts_with("Problem when reading level 'levels/missing.stl': "));
    assert!(message.contains("file not found: levels/missing.stl"));
}

#[test]
fn unsupported_version_soft_fails() {
    let ctx = E2ETestContext::new();
    ctx.write_data(
        "levels/future.stl",
        r#"(supertux-level (version 3) (name "Future") (sector (name "main")))"#,
    );

    let level = ctx
        .app
        .use_cases
        .level
        .load
        .from_file("levels/future.stl", false)
        .unwrap();

    assert_eq!(level.sector_count(), 0);
    assert_eq!(
        ctx.diagnostics.warnings(),
        vec![Diagnostic::UnsupportedVersion {
            context: "levels/future.stl".into(),
            version: 3,
        }]
    );
}

#[test]
fn legacy_level_builds_one_sector() {
    let ctx = E2ETestContext::new();
    ctx.write_data(
        "levels/old.stl",
        r#"(supertux-level
             (name "Old Times")
             (author "Bill")
             (music "retro.mod")
             (interactive-tm 0 0 0)
             (objects (snowball (x 10)) (mriceblock (x 20))))"#,
    );

    let level = ctx
        .app
        .use_cases
        .level
        .load
        .from_file("levels/old.stl", false)
        .unwrap();

    assert_eq!(level.name(), "Old Times");
    assert_eq!(level.sector_names(), vec!["main"]);
    assert_eq!(level.stats().total_badguys(), 2);
    assert_eq!(
        ctx.diagnostics.recorded(),
        vec![Diagnostic::LegacyFormat {
            context: "levels/old.stl".into()
        }]
    );
}

#[test]
fn missing_license_warns_but_loads() {
    let ctx = E2ETestContext::new();
    ctx.write_data(
        "levels/unlicensed.stl",
        &current_level("Unlicensed", None, &[r#"(name "main")"#]),
    );

    let level = ctx
        .app
        .use_cases
        .level
        .load
        .from_file("levels/unlicensed.stl", false)
        .unwrap();

    assert_eq!(level.sector_count(), 1);
    assert_eq!(ctx.diagnostics.warnings().len(), 1);
}

#[test]
fn probing_a_directory_of_mixed_files() {
    let ctx = E2ETestContext::new();
    ctx.write_data("levels/a.stl", &current_level("Alpha", Some("CC0"), &[]));
    ctx.write_data("levels/b.stl", "(supertux-worldmap (name \"Map\"))");
    ctx.write_data("levels/c.stl", "(supertux-level (name \"Broken\"");
    let probe = &ctx.app.use_cases.level.probe;

    let names: Vec<String> = ["levels/a.stl", "levels/b.stl", "levels/c.stl", "levels/d.stl"]
        .iter()
        .map(|path| probe.execute(path))
        .collect();

    assert_eq!(names, vec!["Alpha", "", "", ""]);
    assert_eq!(ctx.diagnostics.warnings().len(), 2);
}

#[test]
fn user_dir_overrides_data_dir() {
    let ctx = E2ETestContext::new();
    ctx.write_data("levels/a.stl", &current_level("Shipped", Some("CC0"), &[]));
    ctx.write_user("levels/a.stl", &current_level("Edited", Some("CC0"), &[]));

    assert_eq!(ctx.app.use_cases.level.probe.execute("levels/a.stl"), "Edited");
}

#[test]
fn translation_directories_are_registered_while_loading() {
    let ctx = E2ETestContext::new();
    ctx.write_data(
        "levels/world1/intro.stl",
        &current_level("Intro", Some("CC0"), &[r#"(name "main")"#]),
    );
    ctx.write_data("levels/world1/de.po", "");
    ctx.write_data(
        "levels/plain/x.stl",
        &current_level("X", Some("CC0"), &[r#"(name "main")"#]),
    );

    let load = &ctx.app.use_cases.level.load;
    load.from_file("levels/world1/intro.stl", false).unwrap();
    load.from_file("levels/plain/x.stl", false).unwrap();

    assert_eq!(ctx.app.translations.directories(), vec!["levels/world1"]);
}

#[test]
fn editable_sessions_keep_editor_objects() {
    let ctx = E2ETestContext::new();
    ctx.write_data(
        "levels/edit.stl",
        &current_level("Edit", Some("CC0"), &[r#"(name "main") (path-marker) (coin)"#]),
    );
    let load = &ctx.app.use_cases.level.load;

    let playing = load.from_file("levels/edit.stl", false).unwrap();
    let editing = load.from_file("levels/edit.stl", true).unwrap();

    assert_eq!(playing.sector("main").unwrap().objects().len(), 1);
    assert_eq!(editing.sector("main").unwrap().objects().len(), 2);
}

#[test]
fn unversioned_level_loads_as_legacy() {
    let ctx = E2ETestContext::new();
    ctx.write_data(
        "levels/old.stl",
        r#"(supertux-level (name "Old") (author "Bill"))"#,
    );
    ctx.write_data(
        "levels/nover.stl",
        r#"(supertux-level (name "NoVer") (sector (name "main")))"#,
    );
    let load = &ctx.app.use_cases.level.load;

    let old = load.from_file("levels/old.stl", false).unwrap();
    let nover = load.from_file("levels/nover.stl", false).unwrap();

    assert_eq!(old.name(), "Old");
    assert_eq!(old.author(), "Bill");
    assert_eq!(old.sector_names(), vec!["main"]);
    assert_eq!(nover.name(), "NoVer");
    assert_eq!(nover.sector_count(), 1);
    assert_eq!(ctx.diagnostics.warnings(), vec![]);
    assert_eq!(ctx.diagnostics.recorded().len(), 2);
}
