//! MessagePack writer for boundary-map chunks (the producer side of the decoder).

use crate::reduction::CellId;

/// Builds `{"chunktype": "boundary_map", "type": <kind>, "map": [[dim, boundary, coefs], ...]}`.
#[derive(Clone, Debug, Default)]
pub struct BoundaryMapWriter {
    kind: String,
    cells: Vec<(u64, Vec<u64>, Vec<i64>)>,
}

impl BoundaryMapWriter {
    /// `kind` is informational (`"simplicial"`, `"cubical"`, `"abstract"`).
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            cells: Vec::new(),
        }
    }

    /// Append a cell; `boundary` lists face cell ids, `coefs` their coefficients.
    pub fn push_cell(&mut self, dimension: u64, boundary: &[u64], coefs: &[i64]) -> CellId {
        let id = CellId(self.cells.len() as u64);
        self.cells.push((dimension, boundary.to_vec(), coefs.to_vec()));
        id
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        write_map_len(&mut out, 3);
        write_str(&mut out, "chunktype");
        write_str(&mut out, "boundary_map");
        write_str(&mut out, "type");
        write_str(&mut out, &self.kind);
        write_str(&mut out, "map");
        write_array_len(&mut out, self.cells.len() as u32);
        for (dim, boundary, coefs) in &self.cells {
            write_array_len(&mut out, 3);
            write_uint(&mut out, *dim);
            write_array_len(&mut out, boundary.len() as u32);
            for &b in boundary {
                write_uint(&mut out, b);
            }
            write_array_len(&mut out, coefs.len() as u32);
            for &c in coefs {
                write_int(&mut out, c);
            }
        }
        out
    }
}

pub(crate) fn write_uint(out: &mut Vec<u8>, v: u64) {
    if v < 0x80 {
        out.push(v as u8);
    } else if v <= u64::from(u8::MAX) {
        out.extend_from_slice(&[0xcc, v as u8]);
    } else if v <= u64::from(u16::MAX) {
        out.push(0xcd);
        out.extend_from_slice(&(v as u16).to_be_bytes());
    } else if v <= u64::from(u32::MAX) {
        out.push(0xce);
        out.extend_from_slice(&(v as u32).to_be_bytes());
    } else {
        out.push(0xcf);
        out.extend_from_slice(&v.to_be_bytes());
    }
}

pub(crate) fn write_int(out: &mut Vec<u8>, v: i64) {
    if v >= 0 {
        write_uint(out, v as u64);
    } else if v >= -32 {
        out.push(v as i8 as u8);
    } else if v >= i64::from(i8::MIN) {
        out.extend_from_slice(&[0xd0, v as i8 as u8]);
    } else if v >= i64::from(i16::MIN) {
        out.push(0xd1);
        out.extend_from_slice(&(v as i16).to_be_bytes());
    } else if v >= i64::from(i32::MIN) {
        out.push(0xd2);
        out.extend_from_slice(&(v as i32).to_be_bytes());
    } else {
        out.push(0xd3);
        out.extend_from_slice(&v.to_be_bytes());
    }
}

pub(crate) fn write_str(out: &mut Vec<u8>, s: &str) {
    let n = s.len();
    if n < 32 {
        out.push(0xa0 | n as u8);
    } else if n <= usize::from(u8::MAX) {
        out.extend_from_slice(&[0xd9, n as u8]);
    } else if n <= usize::from(u16::MAX) {
        out.push(0xda);
        out.extend_from_slice(&(n as u16).to_be_bytes());
    } else {
        out.push(0xdb);
        out.extend_from_slice(&(n as u32).to_be_bytes());
    }
    out.extend_from_slice(s.as_bytes());
}

pub(crate) fn write_array_len(out: &mut Vec<u8>, n: u32) {
    if n < 16 {
        out.push(0x90 | n as u8);
    } else if n <= u32::from(u16::MAX) {
        out.push(0xdc);
        out.extend_from_slice(&(n as u16).to_be_bytes());
    } else {
        out.push(0xdd);
        out.extend_from_slice(&n.to_be_bytes());
    }
}

pub(crate) fn write_map_len(out: &mut Vec<u8>, n: u32) {
    if n < 16 {
        out.push(0x80 | n as u8);
    } else if n <= u32::from(u16::MAX) {
        out.push(0xde);
        out.extend_from_slice(&(n as u16).to_be_bytes());
    } else {
        out.push(0xdf);
        out.extend_from_slice(&n.to_be_bytes());
    }
}
