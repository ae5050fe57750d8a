use kismet_bytecode::ExprToken;

pub fn run() {
    for &token in ExprToken::ALL {
        println!("0x{:02X}  {}", token.byte(), token.name());
    }
}
