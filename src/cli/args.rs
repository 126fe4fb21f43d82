// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "file_stats",
    version = crate::VERSION,
    about = "数値ファイル/テキストファイルの簡易統計ツール"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", global = true, help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 平均値の小数点以下桁数（table 出力のみ, 0..=65535）
    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u16),
        global = true,
        help_heading = "出力"
    )]
    pub precision: u16,

    /// ログを詳細化（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, global = true, conflicts_with = "quiet")]
    pub verbose: u8,

    /// ログを抑制
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 1行1数値のファイルを集計（件数/合計/最大/最小/平均）
    Numbers {
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        paths: Vec<PathBuf>,
    },
    /// テキストファイルを集計（単語数/最長単語/行数）
    Text {
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        paths: Vec<PathBuf>,
    },
    /// サンプルデータ一式を集計するデモ
    Demo {
        /// sample-numbers.txt / quotes.txt / sample-text.txt を含むディレクトリ
        #[arg(long, default_value = "data", value_hint = ValueHint::DirPath)]
        data_dir: PathBuf,
    },
}
