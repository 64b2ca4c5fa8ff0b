// crates/cli/src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "owner_lines",
    version,
    about = "owners.txt に宣言されたオーナーごとのソース行数を集計するツール"
)]
pub struct Args {
    /// 走査するルートパス
    #[arg(value_hint = ValueHint::AnyPath)]
    pub root: PathBuf,

    /// レポートの出力先ファイル（省略時は標準出力）
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}
