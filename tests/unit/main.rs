//! Unit tests mirroring the `src/` layout, plus the binary's parse-and-run flow


#[cfg(test)]
mod tests {
    use apparatus::io::cli::{ApparatusRunner, Cli};
    use clap::Parser;
    use std::fs;

    // Runs the same sequence as the binary: parse, build a runner, run
    // Verified by skipping the PNG export in the runner
    #[test]
    fn test_binary_flow_writes_png() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let config_path = dir.path().join("settings.json");
        let written = fs::write(
            &config_path,
            r#"{
                "generator": { "radius_x": 5.0, "radius_y": 6.0, "colors": [0, 1, 2] },
                "animation": { "shuffle_length": 8, "final_frame_duration": 2 }
            }"#,
        );
        assert!(written.is_ok());

        let out_dir = dir.path().join("out");
        let parsed = Cli::try_parse_from([
            "apparatus",
            out_dir.to_str().unwrap_or("out"),
            "--quiet",
            "--scale",
            "2",
            "--config",
            config_path.to_str().unwrap_or("settings.json"),
        ]);
        assert!(parsed.is_ok());
        let Ok(cli) = parsed else {
            return;
        };
        let png_path = cli.png_path(0);

        let mut runner = ApparatusRunner::new(cli);
        assert!(runner.run().is_ok());
        assert!(png_path.exists());
    }
}
