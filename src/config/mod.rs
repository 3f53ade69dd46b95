pub mod toml_config;

use crate::adapters::writer::DEFAULT_FILE_NAME;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
use clap::Parser;
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_PATH: &str = ".";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "phone-extractor", version)]
#[command(about = "Extract phone numbers from every sheet of a spreadsheet")]
pub struct CliConfig {
    /// Spreadsheet to scan (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv)
    pub input_path: String,

    /// Directory for the generated workbook [default: .]
    #[arg(long)]
    pub output_path: Option<String>,

    /// Name of the generated workbook [default: extracted_phone_numbers.xlsx]
    #[arg(long)]
    pub file_name: Option<String>,

    /// Optional TOML config file; explicit flags take precedence
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Sort numbers in the listing and the output file")]
    pub sort: bool,

    #[arg(long, help = "Print a JSON report instead of the plain listing")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 只填入命令列沒有指定的欄位
    pub fn apply_file_config(&mut self, file: &TomlConfig) {
        if self.output_path.is_none() {
            self.output_path = file.output.path.clone();
        }
        if self.file_name.is_none() {
            self.file_name = file.output.file_name.clone();
        }
        self.sort = self.sort || file.output.sort.unwrap_or(false);
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn output_file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    fn sort_output(&self) -> bool {
        self.sort
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 輸入格式交給 reader 判斷，不支援的格式回報為讀檔錯誤
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", self.output_path())?;
        validate_file_name("file_name", self.output_file_name(), &["xlsx"])?;
        Ok(())
    }
}
