use crate::engine::session::SessionError;

/// Respuesta del alumno, del tipo que corresponda al quiz activo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Choice(usize),
    Boolean(bool),
    Text(String),
}

impl Response {
    /// Un texto en blanco (tras trim) cuenta como "sin responder".
    pub fn is_set(&self) -> bool {
        match self {
            Response::Text(t) => !t.trim().is_empty(),
            _ => true,
        }
    }
}

/// Mapa índice de pregunta -> respuesta actual (o ninguna).
/// Solo muta mientras la sesión está en curso; la sesión es quien lo vigila.
#[derive(Debug, Clone)]
pub struct AnswerStore {
    entries: Vec<Option<Response>>,
}

impl AnswerStore {
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sobrescribe la respuesta de `index`. Índice fuera de rango es un
    /// error de programación del llamante, no un estado esperable.
    pub fn set(&mut self, index: usize, response: Response) -> Result<(), SessionError> {
        match self.entries.get_mut(index) {
            Some(slot) => {
                *slot = Some(response);
                Ok(())
            }
            None => Err(SessionError::InvalidIndex {
                index,
                len: self.entries.len(),
            }),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Response> {
        self.entries.get(index).and_then(|e| e.as_ref())
    }

    /// true si todas las preguntas tienen respuesta efectiva
    /// (los textos en blanco no cuentan).
    pub fn is_complete(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.as_ref().is_some_and(Response::is_set))
    }

    pub fn answered_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.as_ref().is_some_and(Response::is_set))
            .count()
    }

    pub fn clear(&mut self) {
        for e in &mut self.entries {
            *e = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_empty_until_every_index_is_set() {
        let mut store = AnswerStore::new(3);
        assert!(!store.is_complete());
        store.set(0, Response::Choice(1)).expect("in range");
        store.set(2, Response::Choice(0)).expect("in range");
        assert!(!store.is_complete());
        store.set(1, Response::Choice(3)).expect("in range");
        assert!(store.is_complete());
    }

    #[test]
    fn set_overwrites_previous_response() {
        let mut store = AnswerStore::new(1);
        store.set(0, Response::Boolean(true)).expect("in range");
        store.set(0, Response::Boolean(false)).expect("in range");
        assert_eq!(store.get(0), Some(&Response::Boolean(false)));
    }

    #[test]
    fn set_out_of_range_is_invalid_index() {
        let mut store = AnswerStore::new(2);
        let err = store.set(2, Response::Choice(0)).unwrap_err();
        assert!(matches!(err, SessionError::InvalidIndex { index: 2, len: 2 }));
    }

    #[test]
    fn blank_text_counts_as_unset() {
        let mut store = AnswerStore::new(2);
        store.set(0, Response::Text("   ".into())).expect("in range");
        store.set(1, Response::Text("identity".into())).expect("in range");
        assert!(!store.is_complete());
        assert_eq!(store.answered_count(), 1);
        store.set(0, Response::Text("7".into())).expect("in range");
        assert!(store.is_complete());
    }

    #[test]
    fn clear_resets_every_entry() {
        let mut store = AnswerStore::new(2);
        store.set(0, Response::Choice(1)).expect("in range");
        store.set(1, Response::Choice(2)).expect("in range");
        store.clear();
        assert!(store.get(0).is_none());
        assert!(store.get(1).is_none());
        assert_eq!(store.answered_count(), 0);
    }
}
