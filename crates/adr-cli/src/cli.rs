//! CLI argument definitions for ADR Lookup.

use std::path::PathBuf;

use adr_model::{AgeGroup, Gender, PatientContext};
use adr_report::DEFAULT_LINES_PER_PAGE;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "adr-lookup",
    version,
    about = "ADR Lookup - Adverse drug reaction profiles and reports",
    long_about = "Look up a drug in the reference ADR dataset, summarize its adverse\n\
                  reactions and risk, and generate a downloadable report.\n\n\
                  The dataset location is fixed at build time and may be overridden\n\
                  with the ADR_DATASET_PATH environment variable."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include patient context values (age group, gender) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every drug in the reference dataset.
    Drugs,

    /// Show the ADR profile of a drug.
    Lookup(LookupArgs),

    /// Generate an ADR report document for a drug.
    Report(ReportArgs),
}

#[derive(Args)]
pub struct PatientArgs {
    /// Patient age group.
    #[arg(long = "age-group", value_enum, default_value = "adult")]
    pub age_group: AgeGroupArg,

    /// Patient gender.
    #[arg(long = "gender", value_enum, default_value = "male")]
    pub gender: GenderArg,
}

impl PatientArgs {
    pub fn context(&self) -> PatientContext {
        PatientContext::new(self.age_group.into(), self.gender.into())
    }
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Generic name, matched exactly (case-sensitive).
    #[arg(value_name = "DRUG")]
    pub drug: String,

    #[command(flatten)]
    pub patient: PatientArgs,

    /// Print the record and derived profile as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Generic name, matched exactly (case-sensitive).
    #[arg(value_name = "DRUG")]
    pub drug: String,

    #[command(flatten)]
    pub patient: PatientArgs,

    /// Output directory for the report (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report format to generate.
    #[arg(long = "format", value_enum, default_value = "pdf")]
    pub format: ReportFormatArg,

    /// Lines per page before a page break.
    #[arg(long = "lines-per-page", value_name = "N", default_value_t = DEFAULT_LINES_PER_PAGE)]
    pub lines_per_page: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AgeGroupArg {
    Baby,
    Child,
    Teen,
    YoungAdult,
    Adult,
    Senior,
}

impl From<AgeGroupArg> for AgeGroup {
    fn from(arg: AgeGroupArg) -> Self {
        match arg {
            AgeGroupArg::Baby => AgeGroup::Baby,
            AgeGroupArg::Child => AgeGroup::Child,
            AgeGroupArg::Teen => AgeGroup::Teen,
            AgeGroupArg::YoungAdult => AgeGroup::YoungAdult,
            AgeGroupArg::Adult => AgeGroup::Adult,
            AgeGroupArg::Senior => AgeGroup::Senior,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Pdf,
    Text,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_of(args: &[&str]) -> PatientContext {
        let cli = Cli::try_parse_from(args).expect("parse args");
        match cli.command {
            Command::Lookup(args) => args.patient.context(),
            Command::Report(args) => args.patient.context(),
            Command::Drugs => panic!("expected a drug command"),
        }
    }

    #[test]
    fn patient_flags_default_to_adult_male() {
        let patient = patient_of(&["adr-lookup", "lookup", "Warfarin"]);
        assert_eq!(patient, PatientContext::default());
    }

    #[test]
    fn patient_flags_map_to_model() {
        let patient = patient_of(&[
            "adr-lookup",
            "report",
            "Warfarin",
            "--age-group",
            "young-adult",
            "--gender",
            "female",
        ]);
        assert_eq!(patient.age_group, AgeGroup::YoungAdult);
        assert_eq!(patient.gender, Gender::Female);
    }

    #[test]
    fn unknown_age_group_is_rejected() {
        let result =
            Cli::try_parse_from(["adr-lookup", "lookup", "Warfarin", "--age-group", "toddler"]);
        assert!(result.is_err());
    }
}
