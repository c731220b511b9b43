//! Motor genérico de sesiones de quiz.
//!
//! Una [`Session`] por tipo de quiz: guarda las respuestas del alumno,
//! aplica la regla de corrección al enviar y congela la nota hasta reiniciar.

pub mod answers;
pub mod scoring;
pub mod session;

pub use answers::{AnswerStore, Response};
pub use session::{Score, Session, SessionError, Status};
