use recipe_sieve::*;
use std::fs;
use std::path::Path;

fn list(prefix: &str, n: usize) -> String {
    serde_json::to_string(&(1..=n).map(|i| format!("{prefix} {i}")).collect::<Vec<_>>()).unwrap()
}

fn write_source(path: &Path) -> anyhow::Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record([
        "name", "id", "minutes", "tags", "description", "steps", "ingredients", "ingredients_raw",
    ])?;
    w.write_record([
        "quick salad",
        "1",
        "10",
        r#"["30-minutes-or-less","easy"]"#,
        "greens, dressed",
        list("step", 3).as_str(),
        list("ing", 4).as_str(),
        "[]",
    ])?;
    w.write_record([
        "quick cake",
        "2",
        "25",
        r#"["30-minutes-or-less","cakes"]"#,
        "",
        list("step", 3).as_str(),
        list("ing", 4).as_str(),
        "[]",
    ])?;
    w.write_record([
        "long salad",
        "3",
        "15",
        r#"["30-minutes-or-less"]"#,
        "more steps",
        list("step", 6).as_str(),
        list("ing", 4).as_str(),
        "",
    ])?;
    w.write_record([
        "odd tags",
        "4",
        "5",
        "15-minutes-or-less; weeknight",
        "tags are not JSON",
        list("step", 2).as_str(),
        list("ing", 9).as_str(),
        list("raw", 1).as_str(),
    ])?;
    w.flush()?;
    Ok(())
}

fn config_in(dir: &Path) -> SieveConfig {
    SieveConfig::with_paths(
        dir.join("recipes.csv"),
        dir.join("out").join("kept.csv"),
        dir.join("out").join("kept.csv.gz"),
    )
}

#[test]
fn run_keeps_only_quick_savory_rows() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let cfg = config_in(tmp.path());
    write_source(&cfg.source)?;

    let summary = run(&cfg)?;
    assert_eq!(summary.total, 4);
    assert_eq!(summary.kept, 2);
    assert_eq!(summary.kept_easyish, 1);

    let kept = read_recipes(&cfg.out_csv)?;
    let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
    assert_eq!(kept[0].description, "greens, dressed");
    assert_eq!(kept[1].tags.as_deref(), Some("15-minutes-or-less; weeknight"));
    Ok(())
}

#[test]
fn plain_and_gzip_outputs_agree() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let cfg = config_in(tmp.path());
    write_source(&cfg.source)?;

    let summary = run(&cfg)?;
    let plain = read_recipes(&cfg.out_csv)?;
    let gz = read_recipes(&cfg.out_gz)?;
    assert_eq!(plain, gz);
    assert_eq!(plain.len(), summary.kept);

    let text = fs::read_to_string(&cfg.out_csv)?;
    assert_eq!(
        text.lines().next(),
        Some("id,name,description,ingredients,ingredients_raw,steps,tags")
    );

    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.files[0].path, cfg.out_csv);
    assert_eq!(summary.files[0].bytes, fs::metadata(&cfg.out_csv)?.len());
    assert_eq!(summary.files[1].path, cfg.out_gz);
    assert_eq!(summary.files[1].bytes, fs::metadata(&cfg.out_gz)?.len());
    Ok(())
}

#[test]
fn rerun_on_output_is_stable() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let cfg = config_in(tmp.path());
    write_source(&cfg.source)?;
    run(&cfg)?;

    let second = SieveConfig::with_paths(
        cfg.out_gz.clone(),
        tmp.path().join("again.csv"),
        tmp.path().join("again.csv.gz"),
    );
    let summary = run(&second)?;
    assert_eq!(summary.total, 2);
    assert_eq!(summary.kept, 2);
    assert_eq!(read_recipes(&second.out_csv)?, read_recipes(&cfg.out_csv)?);
    Ok(())
}

#[test]
fn summary_text_reports_counts_and_sizes() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let cfg = config_in(tmp.path());
    write_source(&cfg.source)?;

    let text = run(&cfg)?.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Kept 2 recipes out of 4 total.");
    assert!(lines[1].starts_with(&format!("Wrote {} (", cfg.out_csv.display())));
    assert!(lines[1].ends_with("B)"));
    assert!(lines[2].starts_with(&format!("Wrote {} (", cfg.out_gz.display())));
    assert_eq!(lines.last().copied(), Some(report::USAGE_TIP));
    Ok(())
}

#[test]
fn missing_source_writes_nothing() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let cfg = config_in(tmp.path());

    assert!(run(&cfg).is_err());
    assert!(!cfg.out_csv.exists());
    assert!(!cfg.out_gz.exists());
    Ok(())
}

#[test]
fn empty_source_still_writes_headers() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let cfg = config_in(tmp.path());
    fs::write(&cfg.source, "id,name,description,ingredients,ingredients_raw,steps,tags\n")?;

    let summary = run(&cfg)?;
    assert_eq!((summary.total, summary.kept), (0, 0));
    assert!(read_recipes(&cfg.out_csv)?.is_empty());
    assert!(read_recipes(&cfg.out_gz)?.is_empty());
    Ok(())
}
