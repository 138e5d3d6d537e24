use std::io;

use avaria_app::context::AppContext;
use clap::Args;

use crate::cli::output_error;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Username
    #[arg(long, short)]
    username: String,

    /// Password
    #[arg(long, short)]
    password: String,
}

pub(crate) fn run(
    args: LoginArgs,
    ctx: &AppContext,
    out: &mut impl io::Write,
) -> Result<(), String> {
    let session = ctx
        .auth
        .login(&args.username, &args.password)
        .map_err(|error| format!("login failed: {error}"))?;

    writeln!(out, "Bem-vindo, {}!", session.username).map_err(output_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cli::tests::{context, execute};

    #[test]
    fn accepts_default_credentials() -> TestResult {
        let ctx = context()?;

        let output = execute(&ctx, &["login", "-u", "admin", "-p", "admin"])?;

        assert_eq!(output, "Bem-vindo, admin!\n");

        Ok(())
    }

    #[test]
    fn rejects_wrong_password() -> TestResult {
        let ctx = context()?;

        let result = execute(&ctx, &["login", "-u", "admin", "-p", "x"]);

        assert_eq!(
            result,
            Err("login failed: invalid username or password".to_string())
        );

        Ok(())
    }
}
