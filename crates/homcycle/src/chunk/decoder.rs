//! Pushdown automaton extracting 1-cell boundaries from a boundary-map chunk.
//!
//! Each stack frame pairs a `ParserState` with the number of child values its
//! container announced; one `dispatch` call handles one token. Frames are popped
//! once all announced children were consumed, and `close` runs the state's exit
//! action (emitting an edge for `Dim1Boundary`).

use super::lexer::{Lexer, Token};
use super::types::{DecodeCfg, DecodeError, EdgeTriple};
use crate::reduction::CellId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ParserState {
    /// Root slot (`in_map == false`) or the root map's key/value sequence.
    /// `armed` is set after the key `"map"`.
    Toplevel { armed: bool, in_map: bool },
    /// Cell array; child `k` is cell `k`.
    Map,
    /// `[dimension, boundary, sign]` of cell `index`.
    Cell { index: u64, dimension: Option<u64> },
    /// `[begin, end]` of 1-cell `index`.
    Dim1Boundary { index: u64, ends: [u64; 2] },
    /// Discarded values; nested containers extend `len` instead of pushing.
    SkipArray,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    state: ParserState,
    len: u64,
    next: u64,
}

impl Frame {
    fn new(state: ParserState, len: u64) -> Self {
        Self {
            state,
            len,
            next: 0,
        }
    }
}

/// Streaming decoder for one boundary-map chunk and one target cell.
pub struct StreamDecoder<'a> {
    lexer: Lexer<'a>,
    birth: u64,
    cfg: DecodeCfg,
    stack: Vec<Frame>,
    edges: Vec<EdgeTriple>,
    finished: bool,
}

impl<'a> StreamDecoder<'a> {
    pub fn new(bytes: &'a [u8], birth: u64, cfg: DecodeCfg) -> Self {
        Self {
            lexer: Lexer::new(bytes),
            birth,
            cfg,
            stack: Vec::new(),
            edges: Vec::new(),
            finished: false,
        }
    }

    /// Run until cells `0..=birth` were seen; returns every 1-cell boundary among them.
    pub fn run(mut self) -> Result<Vec<EdgeTriple>, DecodeError> {
        self.stack.push(Frame::new(
            ParserState::Toplevel {
                armed: false,
                in_map: false,
            },
            1,
        ));
        while !self.finished {
            let Some(top) = self.stack.last().copied() else {
                break;
            };
            if top.next == top.len {
                self.stack.pop();
                self.close(top)?;
                continue;
            }
            if top.state == ParserState::Map && top.next > self.birth {
                self.finished = true;
                break;
            }
            let offset = self.lexer.offset();
            let token = self.lexer.next_token()?;
            self.dispatch(token, offset)?;
        }
        if self.finished {
            tracing::trace!(edges = self.edges.len(), "boundary map decoded");
            Ok(self.edges)
        } else {
            Err(DecodeError::MissingMap)
        }
    }

    fn set_state(&mut self, state: ParserState) {
        if let Some(top) = self.stack.last_mut() {
            top.state = state;
        }
    }

    fn push(&mut self, state: ParserState, len: u64) {
        tracing::trace!(?state, len, depth = self.stack.len(), "enter");
        self.stack.push(Frame::new(state, len));
    }

    fn dispatch(&mut self, token: Token<'a>, offset: usize) -> Result<(), DecodeError> {
        let Some(top) = self.stack.last_mut() else {
            return Ok(());
        };
        let k = top.next;
        top.next += 1;
        let state = top.state;
        match state {
            ParserState::Toplevel { armed, in_map } => {
                self.on_toplevel(k, armed, in_map, token, offset)
            }
            ParserState::Map => self.on_map(k, token, offset),
            ParserState::Cell { index, dimension } => {
                self.on_cell(k, index, dimension, token, offset)
            }
            ParserState::Dim1Boundary { index, ends } => {
                self.on_boundary(k, index, ends, token, offset)
            }
            ParserState::SkipArray => {
                self.skip(token);
                Ok(())
            }
        }
    }

    fn on_toplevel(
        &mut self,
        k: u64,
        armed: bool,
        in_map: bool,
        token: Token<'a>,
        offset: usize,
    ) -> Result<(), DecodeError> {
        if !in_map {
            match token {
                Token::Map(n) => self.push(
                    ParserState::Toplevel {
                        armed: false,
                        in_map: true,
                    },
                    2 * u64::from(n),
                ),
                other => self.skip(other),
            }
            return Ok(());
        }
        if k % 2 == 0 {
            let armed = matches!(token, Token::Str(key) if key == b"map");
            self.set_state(ParserState::Toplevel { armed, in_map });
            if !armed {
                self.skip(token);
            }
            return Ok(());
        }
        if !armed {
            self.skip(token);
            return Ok(());
        }
        self.set_state(ParserState::Toplevel {
            armed: false,
            in_map,
        });
        let Token::Array(n) = token else {
            return Err(DecodeError::UnexpectedType {
                offset,
                expected: "array",
                context: "boundary map",
            });
        };
        let len = u64::from(n);
        if len > self.cfg.max_cells {
            return Err(DecodeError::TooManyCells {
                len,
                max: self.cfg.max_cells,
            });
        }
        self.push(ParserState::Map, len);
        Ok(())
    }

    fn on_map(&mut self, k: u64, token: Token<'a>, offset: usize) -> Result<(), DecodeError> {
        match token {
            Token::Array(3) => {
                self.push(
                    ParserState::Cell {
                        index: k,
                        dimension: None,
                    },
                    3,
                );
                Ok(())
            }
            Token::Array(n) => Err(DecodeError::CellArity {
                cell: k,
                len: u64::from(n),
            }),
            _ => Err(DecodeError::UnexpectedType {
                offset,
                expected: "array",
                context: "cell",
            }),
        }
    }

    fn on_cell(
        &mut self,
        k: u64,
        index: u64,
        dimension: Option<u64>,
        token: Token<'a>,
        offset: usize,
    ) -> Result<(), DecodeError> {
        match k {
            0 => match token {
                Token::UInt(d) => {
                    self.set_state(ParserState::Cell {
                        index,
                        dimension: Some(d),
                    });
                    Ok(())
                }
                Token::Int(_) => Err(DecodeError::NegativeInteger { offset }),
                _ => Err(DecodeError::UnexpectedType {
                    offset,
                    expected: "integer",
                    context: "cell dimension",
                }),
            },
            1 if dimension == Some(1) => match token {
                Token::Array(2) => {
                    self.push(ParserState::Dim1Boundary { index, ends: [0; 2] }, 2);
                    Ok(())
                }
                Token::Array(n) => Err(DecodeError::BoundaryArity {
                    cell: index,
                    len: u64::from(n),
                }),
                _ => Err(DecodeError::UnexpectedType {
                    offset,
                    expected: "array",
                    context: "1-cell boundary",
                }),
            },
            _ => {
                self.skip(token);
                Ok(())
            }
        }
    }

    fn on_boundary(
        &mut self,
        k: u64,
        index: u64,
        mut ends: [u64; 2],
        token: Token<'a>,
        offset: usize,
    ) -> Result<(), DecodeError> {
        match token {
            Token::UInt(v) => {
                ends[k as usize] = v;
                self.set_state(ParserState::Dim1Boundary { index, ends });
                Ok(())
            }
            Token::Int(_) => Err(DecodeError::NegativeInteger { offset }),
            _ => Err(DecodeError::UnexpectedType {
                offset,
                expected: "integer",
                context: "boundary vertex",
            }),
        }
    }

    /// Discard `token` and, for containers, every value inside it.
    fn skip(&mut self, token: Token<'a>) {
        let len = match token {
            Token::Array(n) => u64::from(n),
            Token::Map(n) => 2 * u64::from(n),
            _ => return,
        };
        if len == 0 {
            return;
        }
        match self.stack.last_mut() {
            Some(top) if top.state == ParserState::SkipArray => top.len += len,
            _ => self.push(ParserState::SkipArray, len),
        }
    }

    fn close(&mut self, frame: Frame) -> Result<(), DecodeError> {
        tracing::trace!(state = ?frame.state, "leave");
        match frame.state {
            ParserState::Map => {
                let needed = self.birth.saturating_add(1);
                if frame.len < needed {
                    return Err(DecodeError::Incomplete {
                        cells: frame.len,
                        needed,
                    });
                }
                self.finished = true;
            }
            ParserState::Dim1Boundary { index, ends } => self.edges.push(EdgeTriple {
                edge_id: CellId(index),
                begin: ends[0],
                end: ends[1],
            }),
            ParserState::Toplevel { .. } | ParserState::Cell { .. } | ParserState::SkipArray => {}
        }
        Ok(())
    }
}

/// Decode the 1-cell boundaries of cells `0..=birth`.
///
/// Succeeds only when the chunk's cell array holds at least `birth + 1` cells;
/// on error nothing is returned, even edges decoded before the failure.
pub fn decode_boundary_edges(
    bytes: &[u8],
    birth: u64,
    cfg: DecodeCfg,
) -> Result<Vec<EdgeTriple>, DecodeError> {
    StreamDecoder::new(bytes, birth, cfg).run()
}
