//! Command-line shape over every valid flag combination.

use std::path::Path;

use cmake_driver::layout::Layout;
use cmake_driver::model::{BuildConfig, BuildType, Platform};
use cmake_driver::plan::plan;

fn all_configs() -> Vec<BuildConfig> {
    let mut out = Vec::new();
    for platform in [Platform::Win32, Platform::Linux] {
        for build_type in BuildType::ALL {
            for bits in 0u8..16 {
                out.push(BuildConfig {
                    platform,
                    build_type,
                    clean: bits & 1 != 0,
                    use_sdl: bits & 2 != 0,
                    diagnostic: bits & 4 != 0,
                    internal_build: bits & 8 != 0,
                });
            }
        }
    }
    out
}

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

#[test]
fn feature_tokens_appear_once_and_match_flags() {
    let layout = Layout::new(Path::new("../..")).expect("utf-8 anchor");
    for cfg in all_configs() {
        let p = plan(&cfg, &layout, "cmake");
        let tokens = p.generate.tokens();

        for (name, value) in [
            ("use_sdl", cfg.use_sdl),
            ("diagnostic", cfg.diagnostic),
            ("internal_build", cfg.internal_build),
        ] {
            let prefix = format!("-D{name}=");
            let hits: Vec<_> = tokens.iter().filter(|t| t.starts_with(&prefix)).collect();
            assert_eq!(hits.len(), 1, "{name} in {tokens:?}");
            assert_eq!(hits[0], &format!("{prefix}{}", on_off(value)));
        }

        // feature definitions always close the generator command, in order
        let tail: Vec<_> = tokens[tokens.len() - 3..]
            .iter()
            .map(|t| t.split('=').next().unwrap_or_default())
            .collect();
        assert_eq!(tail, ["-Duse_sdl", "-Ddiagnostic", "-Dinternal_build"]);
        assert_eq!(&tokens[..2], ["cmake", "../../handmade"]);
    }
}

#[test]
fn platform_decides_where_build_type_goes() {
    let layout = Layout::new(Path::new("../..")).expect("utf-8 anchor");
    for cfg in all_configs() {
        let p = plan(&cfg, &layout, "cmake");
        let build_type_defs = p
            .generate
            .tokens()
            .iter()
            .filter(|t| t.starts_with("-DCMAKE_BUILD_TYPE="))
            .count();

        match cfg.platform {
            Platform::Win32 => {
                assert_eq!(build_type_defs, 0);
                assert_eq!(&p.generate.tokens()[2..4], ["-G", "Visual Studio 14 2015 Win64"]);
                assert_eq!(
                    p.build.tokens(),
                    ["cmake", "--build", ".", "--config", cfg.build_type.as_str()]
                );
            }
            Platform::Linux => {
                assert_eq!(build_type_defs, 1);
                assert!(
                    p.generate
                        .contains(&format!("-DCMAKE_BUILD_TYPE={}", cfg.build_type))
                );
                assert!(!p.generate.contains("-G"));
                assert!(!p.build.contains("--config"));
                assert_eq!(p.build.tokens(), ["cmake", "--build", "."]);
            }
        }
    }
}
