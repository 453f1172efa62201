#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(["patent-predictor"]).unwrap();

        assert!(args.config.is_none());
        assert!(args.env_file.is_none());
        assert!(args.output_path.is_none());
        assert!(args.model.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_short_options() {
        let args = Args::try_parse_from([
            "patent-predictor",
            "-c",
            "/test/patent-predictor.toml",
            "-o",
            "/test/reports",
            "-m",
            "deepseek-reasoner",
            "-v",
        ])
        .unwrap();

        assert_eq!(
            args.config,
            Some(PathBuf::from("/test/patent-predictor.toml"))
        );
        assert_eq!(args.output_path, Some(PathBuf::from("/test/reports")));
        assert_eq!(args.model, Some("deepseek-reasoner".to_string()));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_long_options() {
        let args = Args::try_parse_from([
            "patent-predictor",
            "--config",
            "custom.toml",
            "--env-file",
            "custom.env",
            "--output-path",
            "out",
            "--model",
            "deepseek-chat",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.env_file, Some(PathBuf::from("custom.env")));
        assert_eq!(args.output_path, Some(PathBuf::from("out")));
        assert_eq!(args.model, Some("deepseek-chat".to_string()));
        assert!(args.verbose);
    }

    #[test]
    fn test_base_url_is_not_a_flag() {
        let result = Args::try_parse_from([
            "patent-predictor",
            "--llm-api-base-url",
            "https://example.invalid",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_config_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("patent-predictor.toml");
        fs::write(
            &config_path,
            "output_path = \"from-file\"\n\n[llm]\nmodel_name = \"file-model\"\n",
        )
        .unwrap();
        let env_path = temp_dir.path().join(".env");
        fs::write(&env_path, "# empty settings\n").unwrap();

        let args = Args::try_parse_from([
            "patent-predictor",
            "--config",
            config_path.to_str().unwrap(),
            "--env-file",
            env_path.to_str().unwrap(),
            "--model",
            "cli-model",
            "--verbose",
        ])
        .unwrap();

        let config = args.into_config().unwrap();
        assert_eq!(config.output_path, PathBuf::from("from-file"));
        assert_eq!(config.llm.model_name, "cli-model");
        assert!(config.verbose);
    }

    #[test]
    fn test_into_config_with_missing_config_file() {
        let args = Args::try_parse_from([
            "patent-predictor",
            "--config",
            "/nonexistent/patent-predictor.toml",
        ])
        .unwrap();

        assert!(args.into_config().is_err());
    }
}
