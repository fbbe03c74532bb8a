//! Binary buffer writer with auto-growing capacity.

use crate::BufferError;

/// A binary buffer writer that grows automatically as needed.
///
/// Bytes are appended at the cursor `x`; `x0` marks the start of the
/// current encode window, so a single writer can be reused across many
/// encode calls via [`Writer::reset`] and [`Writer::flush`]. All
/// multi-byte writes are big-endian, which is the only byte order the
/// wire format uses.
///
/// # Example
///
/// ```
/// use ziproto_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01).unwrap();
/// writer.u16(0x0203).unwrap();
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where the current encode window starts.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with default allocation size (64KB).
    pub fn new() -> Self {
        Self::with_alloc_size(64 * 1024)
    }

    /// Creates a new writer with custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        let uint8 = vec![0u8; alloc_size];
        Self {
            uint8,
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Ensures the buffer has at least `capacity` bytes available past the
    /// cursor, growing geometrically when it does not.
    pub fn ensure_capacity(&mut self, capacity: usize) -> Result<(), BufferError> {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total = self.uint8.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size)?;
        }
        Ok(())
    }

    fn grow(&mut self, new_size: usize) -> Result<(), BufferError> {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = Vec::new();
        new_buf
            .try_reserve_exact(new_size)
            .map_err(|_| BufferError::AllocFailed)?;
        new_buf.resize(new_size, 0);
        new_buf[..x - x0].copy_from_slice(&self.uint8[x0..x]);
        self.uint8 = new_buf;
        self.x = x - x0;
        self.x0 = 0;
        Ok(())
    }

    /// Starts a new encode window at the current cursor.
    pub fn reset(&mut self) {
        self.x0 = self.x;
    }

    /// Discards everything written since the last [`Writer::reset`], so a
    /// failed encode leaves no partial bytes behind.
    pub fn rewind(&mut self) {
        self.x = self.x0;
    }

    /// Returns the bytes written since the last reset and starts a new
    /// window. The result contains exactly the written bytes, never the
    /// unused tail of the allocation.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) -> Result<(), BufferError> {
        self.ensure_capacity(1)?;
        self.uint8[self.x] = val;
        self.x += 1;
        Ok(())
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) -> Result<(), BufferError> {
        self.u8(val as u8)
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) -> Result<(), BufferError> {
        self.ensure_capacity(2)?;
        let bytes = val.to_be_bytes();
        self.uint8[self.x..self.x + 2].copy_from_slice(&bytes);
        self.x += 2;
        Ok(())
    }

    /// Writes a signed 16-bit integer (big-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) -> Result<(), BufferError> {
        self.u16(val as u16)
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) -> Result<(), BufferError> {
        self.ensure_capacity(4)?;
        let bytes = val.to_be_bytes();
        self.uint8[self.x..self.x + 4].copy_from_slice(&bytes);
        self.x += 4;
        Ok(())
    }

    /// Writes a signed 32-bit integer (big-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) -> Result<(), BufferError> {
        self.u32(val as u32)
    }

    /// Writes an unsigned 64-bit integer (big-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) -> Result<(), BufferError> {
        self.ensure_capacity(8)?;
        let bytes = val.to_be_bytes();
        self.uint8[self.x..self.x + 8].copy_from_slice(&bytes);
        self.x += 8;
        Ok(())
    }

    /// Writes a signed 64-bit integer (big-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) -> Result<(), BufferError> {
        self.u64(val as u64)
    }

    /// Writes a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) -> Result<(), BufferError> {
        self.u32(val.to_bits())
    }

    /// Writes a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) -> Result<(), BufferError> {
        self.u64(val.to_bits())
    }

    /// Writes a u8 followed by a u16 (big-endian).
    pub fn u8u16(&mut self, u8_val: u8, u16_val: u16) -> Result<(), BufferError> {
        self.ensure_capacity(3)?;
        self.uint8[self.x] = u8_val;
        let bytes = u16_val.to_be_bytes();
        self.uint8[self.x + 1..self.x + 3].copy_from_slice(&bytes);
        self.x += 3;
        Ok(())
    }

    /// Writes a u8 followed by a u32 (big-endian).
    pub fn u8u32(&mut self, u8_val: u8, u32_val: u32) -> Result<(), BufferError> {
        self.ensure_capacity(5)?;
        self.uint8[self.x] = u8_val;
        let bytes = u32_val.to_be_bytes();
        self.uint8[self.x + 1..self.x + 5].copy_from_slice(&bytes);
        self.x += 5;
        Ok(())
    }

    /// Writes a u8 followed by a u64 (big-endian).
    pub fn u8u64(&mut self, u8_val: u8, u64_val: u64) -> Result<(), BufferError> {
        self.ensure_capacity(9)?;
        self.uint8[self.x] = u8_val;
        let bytes = u64_val.to_be_bytes();
        self.uint8[self.x + 1..self.x + 9].copy_from_slice(&bytes);
        self.x += 9;
        Ok(())
    }

    /// Writes a u8 followed by a f32 (big-endian).
    pub fn u8f32(&mut self, u8_val: u8, f32_val: f32) -> Result<(), BufferError> {
        self.ensure_capacity(5)?;
        self.uint8[self.x] = u8_val;
        let bytes = f32_val.to_be_bytes();
        self.uint8[self.x + 1..self.x + 5].copy_from_slice(&bytes);
        self.x += 5;
        Ok(())
    }

    /// Writes a u8 followed by a f64 (big-endian).
    pub fn u8f64(&mut self, u8_val: u8, f64_val: f64) -> Result<(), BufferError> {
        self.ensure_capacity(9)?;
        self.uint8[self.x] = u8_val;
        let bytes = f64_val.to_be_bytes();
        self.uint8[self.x + 1..self.x + 9].copy_from_slice(&bytes);
        self.x += 9;
        Ok(())
    }

    /// Writes a byte slice verbatim.
    pub fn buf(&mut self, buf: &[u8]) -> Result<(), BufferError> {
        let length = buf.len();
        self.ensure_capacity(length)?;
        self.uint8[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
        Ok(())
    }

    /// Writes the UTF-8 bytes of a string. Returns the number of bytes
    /// written.
    pub fn utf8(&mut self, s: &str) -> Result<usize, BufferError> {
        let bytes = s.as_bytes();
        self.buf(bytes)?;
        Ok(bytes.len())
    }
}
