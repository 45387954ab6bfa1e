use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("embedkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("embedkit Contributors")
        .about("Convert embed snippets into AMP and Turbo markup")
        .arg(clap::arg!([INPUT] "Local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-d --dialect <DIALECT> "Target dialect (amp, turbo)")
                .default_value("amp")
                .value_parser(["amp", "turbo"]),
        )
        .arg(
            clap::arg!(-p --platform <PLATFORM> "Use a single platform's extractor").value_parser([
                "vkontakte",
                "facebook",
                "instagram",
                "twitter",
                "youtube",
                "iframe",
                "playbuzz",
            ]),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (html, json)")
                .default_value("html")
                .value_parser(["html", "json"]),
        )
        .arg(clap::arg!(--defaults "Fill missing dimensions with platform defaults"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_parser(["bash", "zsh", "fish", "powershell"]),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "embedkit", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "embedkit", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "embedkit", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "embedkit", &completions_dir).unwrap();
}
