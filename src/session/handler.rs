use log::{debug, info, warn};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::{AuthService, CredentialVerifier};
use crate::error::handlers::{log_auth_failure, user_message};
use crate::session::SessionOutcome;
use crate::store::UserLookup;

const USERNAME_PROMPT: &[u8] = b"Username: ";
const PASSWORD_PROMPT: &[u8] = b"Password: ";
const INVALID_INPUT_MESSAGE: &[u8] = b"Error: input is not valid text\n";
const BLOCKED_MESSAGE: &[u8] = b"Too many attempts. Access blocked.\n";

/// Runs the prompt loop until a login succeeds or the attempts run out.
///
/// - Surrounding whitespace is trimmed from both values before authenticating.
/// - `max_attempts` of `None` keeps prompting until success or end of input.
/// - Unknown users and wrong passwords print the same message.
/// - A value that is not valid UTF-8 counts as a failed attempt.
/// - End of input while waiting for a value is reported as `UnexpectedEof`.
pub async fn run_login_session<L, V, R, W>(
    service: &AuthService<L, V>,
    reader: &mut R,
    writer: &mut W,
    max_attempts: Option<usize>,
) -> io::Result<SessionOutcome>
where
    L: UserLookup,
    V: CredentialVerifier,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut attempt = 0;

    while max_attempts.is_none_or(|max| attempt < max) {
        attempt += 1;

        let username = prompt(reader, writer, USERNAME_PROMPT).await?;
        let password = prompt(reader, writer, PASSWORD_PROMPT).await?;
        let (Some(username), Some(password)) = (username, password) else {
            warn!("Login attempt {} failed: input is not valid UTF-8", attempt);
            writer.write_all(INVALID_INPUT_MESSAGE).await?;
            continue;
        };
        debug!("Login attempt {} for {:?}", attempt, username);

        match service.authenticate(&username, &password) {
            Ok(success) => {
                info!(
                    "User {} (id {}) authenticated on attempt {}",
                    success.username, success.user_id, attempt
                );
                writer
                    .write_all(format!("Welcome, {}!\n", success.username).as_bytes())
                    .await?;
                writer.flush().await?;
                return Ok(SessionOutcome::Authenticated(success));
            }
            Err(e) => {
                log_auth_failure(attempt, &e);
                writer
                    .write_all(format!("Error: {}\n", user_message(&e)).as_bytes())
                    .await?;
            }
        }
    }

    info!("Login blocked after {} failed attempt(s)", attempt);
    writer.write_all(BLOCKED_MESSAGE).await?;
    writer.flush().await?;

    Ok(SessionOutcome::Blocked { attempts: attempt })
}

/// Writes `label` and reads one line, returning it trimmed.
///
/// Returns `None` when the line is not valid UTF-8; the line is still consumed.
async fn prompt<R, W>(reader: &mut R, writer: &mut W, label: &[u8]) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(label).await?;
    writer.flush().await?;

    let mut line = Vec::new();
    let n = reader.read_until(b'\n', &mut line).await?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Input closed during login",
        ));
    }

    Ok(String::from_utf8(line)
        .ok()
        .map(|value| value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryUserStore, default_seeds};

    fn service() -> AuthService<InMemoryUserStore> {
        AuthService::new(InMemoryUserStore::from_seeds(&default_seeds()).unwrap())
    }

    async fn run(input: &str, max_attempts: Option<usize>) -> (io::Result<SessionOutcome>, String) {
        let mut reader = input.as_bytes();
        let mut output = Vec::new();
        let outcome = run_login_session(&service(), &mut reader, &mut output, max_attempts).await;
        (outcome, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn welcomes_valid_user() {
        let (outcome, output) = run("joao\n1234\n", Some(3)).await;
        let outcome = outcome.unwrap();
        assert!(matches!(outcome, SessionOutcome::Authenticated(ref s) if s.user_id == 1));
        assert_eq!(output, "Username: Password: Welcome, joao!\n");
    }

    #[tokio::test]
    async fn trims_surrounding_whitespace() {
        let (outcome, _) = run("  joao \r\n\t1234  \r\n", Some(1)).await;
        assert!(matches!(outcome.unwrap(), SessionOutcome::Authenticated(_)));
    }

    #[tokio::test]
    async fn retries_after_failure() {
        let (outcome, output) = run("joao\nwrong\njoao\n1234\n", Some(3)).await;
        assert!(matches!(outcome.unwrap(), SessionOutcome::Authenticated(_)));
        assert!(output.contains("Error: invalid username or password\n"));
        assert!(output.ends_with("Welcome, joao!\n"));
    }

    #[tokio::test]
    async fn blocks_after_max_attempts() {
        let (outcome, output) = run("joao\nx\nmaria\n1234\njoao\n1234\n", Some(2)).await;
        assert_eq!(outcome.unwrap(), SessionOutcome::Blocked { attempts: 2 });
        assert!(output.ends_with("Too many attempts. Access blocked.\n"));
        assert!(!output.contains("Welcome"));
    }

    #[tokio::test]
    async fn masks_unknown_user_and_wrong_password_alike() {
        let (_, unknown) = run("maria\n1234\n", Some(1)).await;
        let (_, wrong) = run("joao\nnope\n", Some(1)).await;
        assert_eq!(unknown, wrong);
    }

    #[tokio::test]
    async fn reports_empty_values() {
        let (outcome, output) = run("\n1234\n", Some(1)).await;
        assert_eq!(outcome.unwrap(), SessionOutcome::Blocked { attempts: 1 });
        assert!(output.contains("Error: username and password are required\n"));
    }

    #[tokio::test]
    async fn end_of_input_is_an_error() {
        let (outcome, _) = run("joao\n", None).await;
        assert_eq!(outcome.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn unbounded_session_keeps_prompting() {
        let input = "a\nb\n".repeat(20) + "joao\n1234\n";
        let (outcome, _) = run(&input, None).await;
        assert!(matches!(outcome.unwrap(), SessionOutcome::Authenticated(_)));
    }

    #[tokio::test]
    async fn invalid_utf8_counts_as_failed_attempt() {
        let mut reader: &[u8] = b"jo\xffao\n1234\njoao\n1234\n";
        let mut output = Vec::new();

        let outcome = run_login_session(&service(), &mut reader, &mut output, Some(2))
            .await
            .unwrap();

        assert!(matches!(outcome, SessionOutcome::Authenticated(_)));
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Error: input is not valid text\n"));
    }

    #[tokio::test]
    async fn invalid_utf8_uses_up_attempts() {
        let mut reader: &[u8] = b"joao\n\xfe\xff\n";
        let mut output = Vec::new();

        let outcome = run_login_session(&service(), &mut reader, &mut output, Some(1))
            .await
            .unwrap();

        assert_eq!(outcome, SessionOutcome::Blocked { attempts: 1 });
    }
}
