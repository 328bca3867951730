//! Types used within the tree builder. Not exported to users.

use crate::{EndTag, StartTag, State};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InsertionMode {
    Initial,
    BeforeHtml,
    BeforeHead,
    InHead,
    InHeadNoscript,
    AfterHead,
    InBody,
    Text,
    InTable,
    InTableText,
    InCaption,
    InColumnGroup,
    InTableBody,
    InRow,
    InCell,
    InSelect,
    InSelectInTable,
    InTemplate,
    AfterBody,
    InFrameset,
    AfterFrameset,
    AfterAfterBody,
    AfterAfterFrameset,
}

/// Whether a character run has already been split at whitespace boundaries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SplitStatus {
    NotSplit,
    Whitespace,
    NotWhitespace,
}

/// A refinement of [`crate::Token`]: doctypes, errors and null characters are handled
/// before mode dispatch, character runs carry their split status.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum TbToken {
    StartTag(StartTag),
    EndTag(EndTag),
    Comment(String),
    Characters(SplitStatus, String),
    NullCharacter,
    Eof,
}

pub(crate) enum ProcessResult {
    Done,
    /// Done, and a self-closing flag on the token was acknowledged.
    DoneAckSelfClosing,
    /// Re-split a character run at whitespace boundaries and reprocess the pieces.
    SplitWhitespace(String),
    /// Process the token again in another insertion mode.
    Reprocess(InsertionMode, TbToken),
    #[allow(dead_code)]
    /// Process the token again through the foreign/HTML dispatch.
    ReprocessForeign(TbToken),
}

/// Where the next node goes: resolved from the [appropriate place for inserting a
/// node](https://html.spec.whatwg.org/#appropriate-place-for-inserting-a-node).
pub(crate) enum InsertionPoint {
    /// Append as last child of this parent.
    LastChild(crate::dom::NodeId),
    /// Foster parenting: insert into `parent` immediately before `before`.
    BeforeSibling {
        parent: crate::dom::NodeId,
        before: crate::dom::NodeId,
    },
}

/// Raw-content models the tree builder switches the tokenizer into.
pub(crate) enum RawKind {
    Rcdata,
    Rawtext,
    ScriptData,
}

impl RawKind {
    pub(crate) fn state(&self) -> State {
        match self {
            RawKind::Rcdata => State::RcData,
            RawKind::Rawtext => State::RawText,
            RawKind::ScriptData => State::ScriptData,
        }
    }
}
