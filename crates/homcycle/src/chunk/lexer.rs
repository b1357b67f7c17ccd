//! MessagePack token reader over a resident byte slice.
//!
//! Containers are reported by their header only (`Array(n)`, `Map(n)`);
//! tracking how many values remain is the caller's job.

use super::types::DecodeError;

/// One MessagePack value header or scalar.
///
/// Non-negative integers always come out as `UInt`, whatever their marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Token<'a> {
    Nil,
    Bool(bool),
    UInt(u64),
    /// Strictly negative.
    Int(i64),
    Float(f64),
    Str(&'a [u8]),
    Bin(&'a [u8]),
    Ext(i8, &'a [u8]),
    Array(u32),
    Map(u32),
}

pub(crate) struct Lexer<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Byte offset of the next token.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or(DecodeError::UnexpectedEof { offset: self.pos })?;
        let out = &self.buf[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take_array::<1>()?[0])
    }

    fn u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    fn u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    fn u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_be_bytes(self.take_array()?))
    }

    fn signed(v: i64) -> Token<'a> {
        if v >= 0 {
            Token::UInt(v as u64)
        } else {
            Token::Int(v)
        }
    }

    fn ext(&mut self, len: usize) -> Result<Token<'a>, DecodeError> {
        let tag = self.u8()? as i8;
        Ok(Token::Ext(tag, self.take(len)?))
    }

    pub(crate) fn next_token(&mut self) -> Result<Token<'a>, DecodeError> {
        let offset = self.pos;
        let marker = self.u8()?;
        let token = match marker {
            0x00..=0x7f => Token::UInt(u64::from(marker)),
            0x80..=0x8f => Token::Map(u32::from(marker & 0x0f)),
            0x90..=0x9f => Token::Array(u32::from(marker & 0x0f)),
            0xa0..=0xbf => Token::Str(self.take(usize::from(marker & 0x1f))?),
            0xc0 => Token::Nil,
            0xc1 => return Err(DecodeError::ReservedMarker { offset }),
            0xc2 => Token::Bool(false),
            0xc3 => Token::Bool(true),
            0xc4 => {
                let n = self.u8()?;
                Token::Bin(self.take(usize::from(n))?)
            }
            0xc5 => {
                let n = self.u16()?;
                Token::Bin(self.take(usize::from(n))?)
            }
            0xc6 => {
                let n = self.u32()?;
                Token::Bin(self.take(n as usize)?)
            }
            0xc7 => {
                let n = self.u8()?;
                self.ext(usize::from(n))?
            }
            0xc8 => {
                let n = self.u16()?;
                self.ext(usize::from(n))?
            }
            0xc9 => {
                let n = self.u32()?;
                self.ext(n as usize)?
            }
            0xca => Token::Float(f64::from(f32::from_bits(self.u32()?))),
            0xcb => Token::Float(f64::from_bits(self.u64()?)),
            0xcc => Token::UInt(u64::from(self.u8()?)),
            0xcd => Token::UInt(u64::from(self.u16()?)),
            0xce => Token::UInt(u64::from(self.u32()?)),
            0xcf => Token::UInt(self.u64()?),
            0xd0 => Self::signed(i64::from(self.u8()? as i8)),
            0xd1 => Self::signed(i64::from(self.u16()? as i16)),
            0xd2 => Self::signed(i64::from(self.u32()? as i32)),
            0xd3 => Self::signed(self.u64()? as i64),
            0xd4 => self.ext(1)?,
            0xd5 => self.ext(2)?,
            0xd6 => self.ext(4)?,
            0xd7 => self.ext(8)?,
            0xd8 => self.ext(16)?,
            0xd9 => {
                let n = self.u8()?;
                Token::Str(self.take(usize::from(n))?)
            }
            0xda => {
                let n = self.u16()?;
                Token::Str(self.take(usize::from(n))?)
            }
            0xdb => {
                let n = self.u32()?;
                Token::Str(self.take(n as usize)?)
            }
            0xdc => Token::Array(u32::from(self.u16()?)),
            0xdd => Token::Array(self.u32()?),
            0xde => Token::Map(u32::from(self.u16()?)),
            0xdf => Token::Map(self.u32()?),
            0xe0..=0xff => Token::Int(i64::from(marker as i8)),
        };
        Ok(token)
    }
}
