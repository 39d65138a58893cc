use crate::libpanelik::quizzes::{Quiz, QuizRow};
use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("no quiz is being edited")]
    NotOpen,
    #[error("no quiz with id `{0}`")]
    UnknownQuiz(String),
    #[error("question {index} does not exist (quiz has {len})")]
    QuestionOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Editor {
    #[default]
    Closed,
    Open(Quiz),
}

/// Everything the editor modal can ask the board to do.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    Open(String),
    EditTitle(String),
    EditQuestion(usize, String),
    AddQuestion,
    RemoveQuestion(usize),
    Cancel,
    Save,
}

/// Receives a draft when the editor is saved.
pub trait SaveSink {
    fn saved(&mut self, draft: &Quiz);
}

/// Writes saved drafts to the log and nowhere else.
#[derive(Debug, Default)]
pub struct LogSink;

impl SaveSink for LogSink {
    fn saved(&mut self, draft: &Quiz) {
        info!("[Editor] Saved quiz {:?}", draft);
    }
}

impl SaveSink for Vec<Quiz> {
    fn saved(&mut self, draft: &Quiz) {
        self.push(draft.clone());
    }
}

pub struct QuizBoard<S: SaveSink> {
    quizzes: Vec<Quiz>,
    editor: Editor,
    sink: S,
}

impl<S: SaveSink> QuizBoard<S> {
    pub fn new(quizzes: Vec<Quiz>, sink: S) -> Self {
        debug!("[Editor] Loaded {} quizzes.", quizzes.len());
        Self {
            quizzes,
            editor: Editor::Closed,
            sink,
        }
    }

    pub fn rows(&self) -> Vec<QuizRow> {
        self.quizzes.iter().map(QuizRow::from).collect()
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn is_open(&self) -> bool {
        matches!(self.editor, Editor::Open(_))
    }

    pub fn draft(&self) -> Option<&Quiz> {
        match &self.editor {
            Editor::Open(draft) => Some(draft),
            Editor::Closed => None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn draft_mut(&mut self) -> Result<&mut Quiz, EditorError> {
        match &mut self.editor {
            Editor::Open(draft) => Ok(draft),
            Editor::Closed => Err(EditorError::NotOpen),
        }
    }

    /// Starts editing a fresh copy of `id`, dropping any draft already open.
    pub fn open(&mut self, id: &str) -> Result<(), EditorError> {
        let quiz = self
            .quiz(id)
            .cloned()
            .ok_or_else(|| EditorError::UnknownQuiz(id.to_string()))?;
        if let Editor::Open(previous) = &self.editor {
            debug!("[Editor] Replacing open draft of {}", previous.id);
        }
        debug!("[Editor] Opened {} ({} questions)", quiz.id, quiz.questions.len());
        self.editor = Editor::Open(quiz);
        Ok(())
    }

    pub fn edit_title(&mut self, title: String) -> Result<(), EditorError> {
        self.draft_mut()?.title = title;
        Ok(())
    }

    pub fn edit_question(&mut self, index: usize, text: String) -> Result<(), EditorError> {
        let draft = self.draft_mut()?;
        let len = draft.questions.len();
        match draft.questions.get_mut(index) {
            Some(question) => {
                *question = text;
                Ok(())
            }
            None => Err(EditorError::QuestionOutOfRange { index, len }),
        }
    }

    pub fn add_question(&mut self) -> Result<(), EditorError> {
        self.draft_mut()?.questions.push(String::new());
        Ok(())
    }

    pub fn remove_question(&mut self, index: usize) -> Result<(), EditorError> {
        let draft = self.draft_mut()?;
        let len = draft.questions.len();
        if index >= len {
            return Err(EditorError::QuestionOutOfRange { index, len });
        }
        draft.questions.remove(index);
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), EditorError> {
        match std::mem::take(&mut self.editor) {
            Editor::Open(draft) => {
                debug!("[Editor] Discarded draft of {}", draft.id);
                Ok(())
            }
            Editor::Closed => Err(EditorError::NotOpen),
        }
    }

    /// Hands the draft to the sink and closes the editor.
    ///
    /// The canonical quiz list is left as it was, so reopening the same quiz
    /// starts again from the original record.
    pub fn save(&mut self) -> Result<(), EditorError> {
        match std::mem::take(&mut self.editor) {
            Editor::Open(draft) => {
                self.sink.saved(&draft);
                Ok(())
            }
            Editor::Closed => Err(EditorError::NotOpen),
        }
    }

    pub fn apply(&mut self, action: EditorAction) -> Result<(), EditorError> {
        match action {
            EditorAction::Open(id) => self.open(&id),
            EditorAction::EditTitle(title) => self.edit_title(title),
            EditorAction::EditQuestion(index, text) => self.edit_question(index, text),
            EditorAction::AddQuestion => self.add_question(),
            EditorAction::RemoveQuestion(index) => self.remove_question(index),
            EditorAction::Cancel => self.cancel(),
            EditorAction::Save => self.save(),
        }
    }
}
