use clap::{Parser, Subcommand, ValueEnum};
use domxml_membench::alloc::CountingAlloc;
use domxml_membench::benches::compare::{self, CompareArgs};
use domxml_membench::corpus::{self, GenerateConfig};
use domxml_membench::harness::{BenchConfig, Profile};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    Quick,
    Full,
}

impl From<ProfileArg> for Profile {
    fn from(v: ProfileArg) -> Self {
        match v {
            ProfileArg::Quick => Profile::Quick,
            ProfileArg::Full => Profile::Full,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a deterministic set of synthetic domain XML files.
    GenerateCorpus {
        /// Output directory for the generated documents.
        #[arg(long, short = 'o', value_name = "DIR")]
        output: PathBuf,

        /// Number of documents to generate.
        #[arg(long, short = 'n', default_value_t = 16)]
        count: u64,

        /// Random seed for deterministic generation.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Parser, Debug)]
#[command(name = "domxml-membench")]
#[command(about = "Compare decode memory cost of libvirt domain XML: libvirtxml vs kubevirt schema")]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// A single libvirt domain.
    #[arg(long, value_name = "FILE")]
    xml: Option<PathBuf>,

    /// A directory with libvirt domain XMLs, scanned recursively.
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ProfileArg::Quick)]
    profile: ProfileArg,

    /// Also write the results as a JSON report.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("domxml_membench=info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> domxml_membench::Result<()> {
    if let Some(Command::GenerateCorpus {
        output,
        count,
        seed,
    }) = args.cmd
    {
        let written = corpus::write_corpus(&output, &GenerateConfig { count, seed })?;
        tracing::info!(
            files = written.len(),
            dir = %output.display(),
            seed,
            "generated corpus"
        );
        return Ok(());
    }

    let cfg = BenchConfig {
        profile: args.profile.into(),
    };
    let compare_args = CompareArgs {
        xml: args.xml,
        dir: args.dir,
    };

    let report = compare::run(&cfg, &compare_args, &mut io::stdout().lock())?;

    if let Some(out) = args.out {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&out, json)?;
        tracing::info!(path = %out.display(), "wrote JSON report");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domxml_membench::Error;
    use tempfile::tempdir;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("domxml-membench").chain(argv.iter().copied()))
    }

    #[test]
    fn parses_measurement_flags() {
        let args = parse(&["--xml", "a.xml", "--dir", "vms", "--profile", "full", "--out", "r.json"]).unwrap();
        assert_eq!(args.xml, Some(PathBuf::from("a.xml")));
        assert_eq!(args.dir, Some(PathBuf::from("vms")));
        assert!(matches!(args.profile, ProfileArg::Full));
        assert_eq!(args.out, Some(PathBuf::from("r.json")));
        assert!(args.cmd.is_none());
    }

    #[test]
    fn no_flags_default_to_quick_profile() {
        let args = parse(&[]).unwrap();
        assert!(args.xml.is_none() && args.dir.is_none() && args.out.is_none());
        assert!(matches!(args.profile, ProfileArg::Quick));
    }

    #[test]
    fn rejects_unknown_profile_and_flags() {
        assert!(parse(&["--profile", "slow"]).is_err());
        assert!(parse(&["--file", "a.xml"]).is_err());
    }

    #[test]
    fn generate_corpus_defaults() {
        let args = parse(&["generate-corpus", "--output", "out"]).unwrap();
        match args.cmd {
            Some(Command::GenerateCorpus { output, count, seed }) => {
                assert_eq!(output, PathBuf::from("out"));
                assert_eq!(count, 16);
                assert_eq!(seed, 42);
            }
            None => panic!("expected generate-corpus"),
        }
    }

    #[test]
    fn generate_corpus_conflicts_with_measurement_flags() {
        assert!(parse(&["--xml", "a.xml", "generate-corpus", "--output", "out"]).is_err());
    }

    #[test]
    fn run_reports_unreadable_input() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.xml");
        let args = parse(&["--xml", missing.to_str().unwrap()]).unwrap();

        let err = run(args).unwrap_err();
        assert!(matches!(err, Error::Read { ref path, .. } if *path == missing));
    }

    #[test]
    fn run_generates_corpus() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("corpus");
        let args = parse(&["generate-corpus", "--output", out.to_str().unwrap(), "-n", "2"]).unwrap();

        run(args).unwrap();
        assert!(out.join("domain_0000.xml").is_file());
        assert!(out.join("domain_0001.xml").is_file());
        assert!(!out.join("domain_0002.xml").exists());
    }
}
