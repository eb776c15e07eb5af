use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::user::stored_hash;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::HashPassword { password } = cmd {
        println!("{}", stored_hash(password));
    }
    Ok(())
}
