use clap::Parser;
use pioneer_tools::bitboard;

#[derive(Parser, Debug)]
#[command(name = "print_bb", about = "Show a bitboard as an 8x8 grid of 1/0, rank 1 printed first")]
struct Args {
    /// Bitboard value
    #[arg(value_name = "BITBOARD")]
    bb: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    print!("{}", bitboard::render(args.bb));
    println!();
}
