//! A growable, cursor-based little-endian byte buffer.
//!
//! The builder stages trie metadata and synonym records into one of these
//! before writing them out; the header codec and the length-prefix reader
//! also go through it so every primitive in the binary format is read or
//! written in exactly one place.

/// In-memory buffer with a read/write cursor over little-endian primitives.
#[derive(Debug, Default, Clone)]
pub struct ByteBuffer {
    data: Vec<u8>,
    pos: usize,
}

impl ByteBuffer {
    pub fn new() -> Self {
        ByteBuffer {
            data: Vec::new(),
            pos: 0,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        ByteBuffer {
            data: Vec::with_capacity(cap),
            pos: 0,
        }
    }

    /// Wrap an existing byte vector for reading; cursor starts at 0.
    pub fn from_vec(data: Vec<u8>) -> Self {
        ByteBuffer { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    fn ensure_capacity(&mut self, end: usize) {
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
    }

    // ---- byte ----

    pub fn write_u8(&mut self, v: u8) {
        let end = self.pos + 1;
        self.ensure_capacity(end);
        self.data[self.pos] = v;
        self.pos = end;
    }

    pub fn read_u8(&mut self) -> u8 {
        let v = self.data[self.pos];
        self.pos += 1;
        v
    }

    // ---- short (16-bit) ----

    pub fn write_u16(&mut self, v: u16) {
        let bytes = v.to_le_bytes();
        let end = self.pos + 2;
        self.ensure_capacity(end);
        self.data[self.pos..end].copy_from_slice(&bytes);
        self.pos = end;
    }

    pub fn read_u16(&mut self) -> u16 {
        let end = self.pos + 2;
        let v = u16::from_le_bytes(self.data[self.pos..end].try_into().unwrap());
        self.pos = end;
        v
    }

    pub fn write_i16(&mut self, v: i16) {
        self.write_u16(v as u16);
    }

    pub fn read_i16(&mut self) -> i16 {
        self.read_u16() as i16
    }

    // ---- int (32-bit) ----

    pub fn write_u32(&mut self, v: u32) {
        let bytes = v.to_le_bytes();
        let end = self.pos + 4;
        self.ensure_capacity(end);
        self.data[self.pos..end].copy_from_slice(&bytes);
        self.pos = end;
    }

    pub fn read_u32(&mut self) -> u32 {
        let end = self.pos + 4;
        let v = u32::from_le_bytes(self.data[self.pos..end].try_into().unwrap());
        self.pos = end;
        v
    }

    pub fn write_i32(&mut self, v: i32) {
        self.write_u32(v as u32);
    }

    pub fn read_i32(&mut self) -> i32 {
        self.read_u32() as i32
    }

    // ---- long (64-bit) ----

    pub fn write_u64(&mut self, v: u64) {
        let bytes = v.to_le_bytes();
        let end = self.pos + 8;
        self.ensure_capacity(end);
        self.data[self.pos..end].copy_from_slice(&bytes);
        self.pos = end;
    }

    pub fn read_u64(&mut self) -> u64 {
        let end = self.pos + 8;
        let v = u64::from_le_bytes(self.data[self.pos..end].try_into().unwrap());
        self.pos = end;
        v
    }

    pub fn write_i64(&mut self, v: i64) {
        self.write_u64(v as u64);
    }

    pub fn read_i64(&mut self) -> i64 {
        self.read_u64() as i64
    }

    // ---- raw bytes ----

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.ensure_capacity(end);
        self.data[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    pub fn read_bytes(&mut self, n: usize) -> &[u8] {
        let end = self.pos + n;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        slice
    }
}

/// Read-only cursor over a borrowed byte slice, for decoding mmap'd sections
/// without copying them into an owned `ByteBuffer`.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, pos: 0 }
    }

    pub fn at(data: &'a [u8], pos: usize) -> Self {
        ByteCursor { data, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn read_u8(&mut self) -> u8 {
        let v = self.data[self.pos];
        self.pos += 1;
        v
    }

    pub fn read_u16(&mut self) -> u16 {
        let end = self.pos + 2;
        let v = u16::from_le_bytes(self.data[self.pos..end].try_into().unwrap());
        self.pos = end;
        v
    }

    pub fn read_i16(&mut self) -> i16 {
        self.read_u16() as i16
    }

    pub fn read_u32(&mut self) -> u32 {
        let end = self.pos + 4;
        let v = u32::from_le_bytes(self.data[self.pos..end].try_into().unwrap());
        self.pos = end;
        v
    }

    pub fn read_i32(&mut self) -> i32 {
        self.read_u32() as i32
    }

    pub fn read_u64(&mut self) -> u64 {
        let end = self.pos + 8;
        let v = u64::from_le_bytes(self.data[self.pos..end].try_into().unwrap());
        self.pos = end;
        v
    }

    pub fn read_i64(&mut self) -> i64 {
        self.read_u64() as i64
    }

    pub fn read_bytes(&mut self, n: usize) -> &'a [u8] {
        let end = self.pos + n;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        slice
    }
}
