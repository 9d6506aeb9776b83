use clap::Parser;
use pioneer_tools::moves;

#[derive(Parser, Debug)]
#[command(name = "move_read", about = "Decode a packed engine move into squares and notation")]
struct Args {
    /// Packed move value; only the low 16 bits are meaningful
    #[arg(value_name = "MOVE")]
    mv: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let d = moves::decode(args.mv as u16);
    println!("Move: {}", d.notation());
    println!("From: {}", d.from);
    println!("To: {}", d.to);
    println!("Piece: {}", d.piece);
}
