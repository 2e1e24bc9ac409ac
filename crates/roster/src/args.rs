use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rosterapp::model::Gender;
use rosterapp::view::SortField;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", version, disable_help_subcommand = true)]
#[command(about = "Maintain a roster of person records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster snapshot
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new record
    #[command(alias = "a")]
    Add(PersonArgs),

    /// Edit fields of an existing record
    #[command(alias = "e")]
    Edit {
        /// Key of the record to edit
        key: String,

        #[command(flatten)]
        fields: EditArgs,
    },

    /// Show records in full
    #[command(alias = "v")]
    Show {
        /// Keys of the records to show
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Delete one or more records
    #[command(alias = "rm")]
    Delete {
        /// Keys of the records to delete
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// List records, sorted and paginated
    #[command(alias = "ls")]
    List(ListArgs),

    /// Select records and delete the selection
    BulkDelete {
        /// Keys to select
        keys: Vec<String>,

        /// Select every record, not just the listed keys
        #[arg(long, conflicts_with = "keys")]
        all: bool,
    },
}

#[derive(Args, Debug)]
pub struct PersonArgs {
    /// Title (e.g. Mr., Mrs., Ms.)
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub firstname: String,

    #[arg(long)]
    pub lastname: String,

    /// Date of birth, YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub birthday: NaiveDate,

    #[arg(long)]
    pub nationality: String,

    /// Citizen id, as 1-2345-67890-12-3 or 13 digits
    #[arg(long, value_name = "ID")]
    pub citizen_id: Option<String>,

    /// Male, Female or Unisex
    #[arg(long)]
    pub gender: Gender,

    #[arg(long, value_name = "PHONE")]
    pub mobile_phone: String,

    #[arg(long, value_name = "PASSPORT")]
    pub passport_no: Option<String>,

    #[arg(long, value_name = "AMOUNT")]
    pub expected_salary: f64,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub firstname: Option<String>,

    #[arg(long)]
    pub lastname: Option<String>,

    /// Date of birth, YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub birthday: Option<NaiveDate>,

    #[arg(long)]
    pub nationality: Option<String>,

    /// Citizen id, as 1-2345-67890-12-3 or 13 digits
    #[arg(long, value_name = "ID", conflicts_with = "clear_citizen_id")]
    pub citizen_id: Option<String>,

    /// Remove the citizen id
    #[arg(long)]
    pub clear_citizen_id: bool,

    /// Male, Female or Unisex
    #[arg(long)]
    pub gender: Option<Gender>,

    #[arg(long, value_name = "PHONE")]
    pub mobile_phone: Option<String>,

    #[arg(long, value_name = "PASSPORT", conflicts_with = "clear_passport_no")]
    pub passport_no: Option<String>,

    /// Remove the passport number
    #[arg(long)]
    pub clear_passport_no: bool,

    #[arg(long, value_name = "AMOUNT")]
    pub expected_salary: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Field to sort by (e.g. name, firstname, birthday, expectedSalary)
    #[arg(long, short)]
    pub sort: Option<SortField>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show, starting at 1
    #[arg(long, short, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,
}
