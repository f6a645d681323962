// SPDX-License-Identifier: MPL-2.0
//! Duration probing for MP4/QuickTime containers.
//!
//! Walks the top-level boxes until `moov`, then reads the movie header
//! (`mvhd`). Media data is skipped with seeks so large files cost only a
//! handful of reads.

use crate::error::{ProbeError, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

const FTYP: [u8; 4] = *b"ftyp";
const MOOV: [u8; 4] = *b"moov";
const MVHD: [u8; 4] = *b"mvhd";

/// Boxes that may open an ISO-BMFF / QuickTime file.
const LEADING_BOXES: [[u8; 4]; 7] = [
    FTYP, MOOV, *b"free", *b"skip", *b"wide", *b"mdat", *b"pnot",
];

#[derive(Debug, Clone, Copy)]
struct BoxHeader {
    kind: [u8; 4],
    /// Offset of the box start.
    offset: u64,
    /// Header length (8, or 16 with a 64-bit size).
    header_len: u64,
    /// Total box length including the header.
    size: u64,
}

impl BoxHeader {
    fn payload_start(&self) -> u64 {
        self.offset + self.header_len
    }

    fn end(&self) -> u64 {
        self.offset + self.size
    }
}

/// Returns the duration in seconds of the movie at `path`.
///
/// An indeterminate duration in the header yields `NaN`.
pub fn duration_secs(path: &Path) -> Result<f64> {
    let file = File::open(path)?;
    probe_duration(&mut BufReader::new(file))
}

/// Reads the movie duration from any seekable MP4/QuickTime stream.
pub fn probe_duration<R: Read + Seek>(reader: &mut R) -> Result<f64> {
    let end = reader.seek(SeekFrom::End(0))?;
    let mut offset = 0;
    let mut first = true;

    while offset < end {
        let header = read_box_header(reader, offset, end)?;
        if first && !LEADING_BOXES.contains(&header.kind) {
            return Err(ProbeError::NotIsoBmff.into());
        }
        first = false;

        if header.kind == MOOV {
            return read_movie_header(reader, header);
        }
        offset = header.end();
    }

    if first {
        return Err(ProbeError::NotIsoBmff.into());
    }
    Err(ProbeError::MissingMovieHeader.into())
}

fn read_movie_header<R: Read + Seek>(reader: &mut R, moov: BoxHeader) -> Result<f64> {
    let mut offset = moov.payload_start();
    while offset < moov.end() {
        let child = read_box_header(reader, offset, moov.end())?;
        if child.kind == MVHD {
            return parse_mvhd(reader, child);
        }
        offset = child.end();
    }
    Err(ProbeError::MissingMovieHeader.into())
}

fn parse_mvhd<R: Read + Seek>(reader: &mut R, mvhd: BoxHeader) -> Result<f64> {
    let payload_len = mvhd.size - mvhd.header_len;
    reader.seek(SeekFrom::Start(mvhd.payload_start()))?;

    let version_and_flags = read_u32(reader, mvhd.offset)?;
    let version = (version_and_flags >> 24) as u8;

    let (timescale, duration, indeterminate) = if version == 1 {
        if payload_len < 32 {
            return Err(ProbeError::Truncated(mvhd.offset).into());
        }
        // creation_time, modification_time
        reader.seek(SeekFrom::Current(16))?;
        let timescale = read_u32(reader, mvhd.offset)?;
        let duration = read_u64(reader, mvhd.offset)?;
        (timescale, duration, duration == u64::MAX)
    } else {
        if payload_len < 20 {
            return Err(ProbeError::Truncated(mvhd.offset).into());
        }
        reader.seek(SeekFrom::Current(8))?;
        let timescale = read_u32(reader, mvhd.offset)?;
        let duration = read_u32(reader, mvhd.offset)?;
        (timescale, u64::from(duration), duration == u32::MAX)
    };

    if timescale == 0 {
        return Err(ProbeError::ZeroTimescale.into());
    }
    if indeterminate {
        return Ok(f64::NAN);
    }
    #[allow(clippy::cast_precision_loss)]
    let secs = duration as f64 / f64::from(timescale);
    Ok(secs)
}

fn read_box_header<R: Read + Seek>(reader: &mut R, offset: u64, limit: u64) -> Result<BoxHeader> {
    if limit.saturating_sub(offset) < 8 {
        return Err(ProbeError::Truncated(offset).into());
    }
    reader.seek(SeekFrom::Start(offset))?;

    let mut buf = [0_u8; 8];
    read_exact(reader, &mut buf, offset)?;
    let short_size = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let kind = [buf[4], buf[5], buf[6], buf[7]];

    let (header_len, size) = match short_size {
        // 64-bit size follows the kind
        1 => {
            if limit - offset < 16 {
                return Err(ProbeError::Truncated(offset).into());
            }
            (16, read_u64(reader, offset)?)
        }
        // Box runs to the end of its parent
        0 => (8, limit - offset),
        n => (8, u64::from(n)),
    };

    if size < header_len || size > limit - offset {
        return Err(ProbeError::Truncated(offset).into());
    }

    Ok(BoxHeader {
        kind,
        offset,
        header_len,
        size,
    })
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8], offset: u64) -> Result<()> {
    reader.read_exact(buf).map_err(|err| {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            ProbeError::Truncated(offset).into()
        } else {
            err.into()
        }
    })
}

fn read_u32<R: Read>(reader: &mut R, offset: u64) -> Result<u32> {
    let mut buf = [0_u8; 4];
    read_exact(reader, &mut buf, offset)?;
    Ok(u32::from_be_bytes(buf))
}

fn read_u64<R: Read>(reader: &mut R, offset: u64) -> Result<u64> {
    let mut buf = [0_u8; 8];
    read_exact(reader, &mut buf, offset)?;
    Ok(u64::from_be_bytes(buf))
}
