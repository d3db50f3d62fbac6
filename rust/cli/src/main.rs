use std::io::Write;

fn main() {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let code = blackjack_cli::run(
        std::env::args_os(),
        &mut stdout,
        &mut stderr,
        &mut stdin.lock(),
    );
    let _ = stdout.flush();
    std::process::exit(code);
}
