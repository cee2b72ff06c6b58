//! Content-stream walking: positioned text fragments from a page.

use std::collections::{BTreeMap, HashMap};

use lopdf::{Dictionary, Document as LopdfDocument, Encoding, Object, ObjectId};

use crate::error::{Error, Result};
use crate::model::Fragment;

/// Average glyph advance as a fraction of the font size. Used to move the
/// text position after a string is shown, since glyph widths are not read.
const AVG_GLYPH_ADVANCE: f32 = 0.5;

/// TJ adjustments (thousandths of text space) above this read as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Extracts text fragments from the content streams of a page.
pub(crate) struct ContentWalker<'a> {
    doc: &'a LopdfDocument,
}

impl<'a> ContentWalker<'a> {
    pub(crate) fn new(doc: &'a LopdfDocument) -> Self {
        Self { doc }
    }

    /// Fragments of a page in content-stream order.
    pub(crate) fn page_fragments(&self, page_id: ObjectId) -> Result<Vec<Fragment>> {
        let fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let content = self.page_content(page_id)?;
        if content.is_empty() {
            return Ok(Vec::new());
        }
        self.walk(&content, &fonts)
    }

    /// Concatenated content streams of a page, decompressed where filtered.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = match page_dict.get(b"Contents") {
            Ok(contents) => contents,
            Err(_) => return Ok(Vec::new()),
        };

        match contents {
            Object::Reference(r) => match self.doc.get_object(*r) {
                Ok(Object::Stream(s)) => s
                    .get_plain_content()
                    .map_err(|e| Error::PdfParse(e.to_string())),
                Ok(Object::Array(arr)) => Ok(self.concat_streams(arr)),
                _ => Err(Error::PdfParse("Invalid content stream".to_string())),
            },
            Object::Array(arr) => Ok(self.concat_streams(arr)),
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    fn concat_streams(&self, refs: &[Object]) -> Vec<u8> {
        let mut content = Vec::new();
        for obj in refs {
            if let Object::Reference(r) = obj {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    match s.get_plain_content() {
                        Ok(data) => {
                            content.extend_from_slice(&data);
                            content.push(b' ');
                        }
                        Err(e) => log::warn!("Skipping unreadable content stream {:?}: {}", r, e),
                    }
                }
            }
        }
        content
    }

    /// Run the text operators of a content stream.
    fn walk(&self, content: &[u8], fonts: &BTreeMap<Vec<u8>, &Dictionary>) -> Result<Vec<Fragment>> {
        let content =
            lopdf::content::Content::decode(content).map_err(|e| Error::PdfParse(e.to_string()))?;

        let font_names: HashMap<&[u8], String> = fonts
            .iter()
            .map(|(key, dict)| {
                let base_font = dict
                    .get(b"BaseFont")
                    .ok()
                    .and_then(|o| o.as_name().ok())
                    .map(|n| String::from_utf8_lossy(n).to_string())
                    .unwrap_or_else(|| String::from_utf8_lossy(key).to_string());
                (key.as_slice(), base_font)
            })
            .collect();

        let mut fragments = Vec::new();
        let mut gs = GraphicsState::default();
        let mut gs_stack: Vec<GraphicsState> = Vec::new();
        let mut text = TextState::default();
        let mut encoding: Option<Encoding> = None;

        for op in &content.operations {
            let operands = &op.operands;
            match op.operator.as_str() {
                "q" => gs_stack.push(gs.clone()),
                "Q" => {
                    if let Some(saved) = gs_stack.pop() {
                        gs = saved;
                    }
                }
                "cm" => {
                    if let Some(m) = matrix_from(operands) {
                        gs.ctm = m.multiply(&gs.ctm);
                    }
                }
                "BT" => text.begin(),
                "ET" => text.in_block = false,
                "Tf" => {
                    if let (Some(Object::Name(key)), Some(size)) =
                        (operands.first(), operands.get(1).and_then(get_number))
                    {
                        text.font_name = font_names
                            .get(key.as_slice())
                            .cloned()
                            .unwrap_or_else(|| String::from_utf8_lossy(key).to_string());
                        text.font_size = size;
                        encoding = fonts
                            .get(key)
                            .and_then(|f| f.get_font_encoding(self.doc).ok());
                    }
                }
                "TL" => {
                    if let Some(leading) = operands.first().and_then(get_number) {
                        text.leading = leading;
                    }
                }
                "Ts" => {
                    if let Some(rise) = operands.first().and_then(get_number) {
                        text.rise = rise;
                    }
                }
                "Td" | "TD" => {
                    if let (Some(tx), Some(ty)) = (
                        operands.first().and_then(get_number),
                        operands.get(1).and_then(get_number),
                    ) {
                        if op.operator == "TD" {
                            text.leading = -ty;
                        }
                        text.move_line(tx, ty);
                    }
                }
                "Tm" => {
                    if let Some(m) = matrix_from(operands) {
                        text.line_matrix = m;
                        text.matrix = m;
                    }
                }
                "T*" => text.next_line(),
                "Tj" => {
                    if let Some(Object::String(bytes, _)) = operands.first() {
                        let shown = decode(encoding.as_ref(), bytes);
                        self.show(&mut fragments, &mut text, &gs, shown, 0.0);
                    }
                }
                "TJ" => {
                    if let Some(Object::Array(items)) = operands.first() {
                        let (shown, adjust) = decode_tj(encoding.as_ref(), items);
                        self.show(&mut fragments, &mut text, &gs, shown, adjust);
                    }
                }
                "'" | "\"" => {
                    text.next_line();
                    let idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = operands.get(idx) {
                        let shown = decode(encoding.as_ref(), bytes);
                        self.show(&mut fragments, &mut text, &gs, shown, 0.0);
                    }
                }
                _ => {}
            }
        }

        Ok(fragments)
    }

    /// Record a shown string at the current position and advance past it.
    fn show(
        &self,
        fragments: &mut Vec<Fragment>,
        text: &mut TextState,
        gs: &GraphicsState,
        shown: String,
        adjust: f32,
    ) {
        if !text.in_block {
            return;
        }

        let size = Matrix([text.font_size, 0.0, 0.0, text.font_size, 0.0, text.rise]);
        let trm = size.multiply(&text.matrix).multiply(&gs.ctm);
        let advance = shown.chars().count() as f32 * text.font_size * AVG_GLYPH_ADVANCE
            - adjust / 1000.0 * text.font_size;

        log::trace!("Shown {:?} at ({:.1}, {:.1})", shown, trm.0[4], trm.0[5]);
        fragments.push(Fragment::with_transform(shown, trm.0, text.font_name.clone()));
        text.matrix = Matrix::translate(advance, 0.0).multiply(&text.matrix);
    }
}

/// A PDF transformation matrix `[a, b, c, d, e, f]`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Matrix([f32; 6]);

impl Default for Matrix {
    fn default() -> Self {
        Matrix([1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }
}

impl Matrix {
    fn translate(tx: f32, ty: f32) -> Self {
        Matrix([1.0, 0.0, 0.0, 1.0, tx, ty])
    }

    /// `self × other` in PDF's row-vector convention.
    fn multiply(&self, other: &Matrix) -> Matrix {
        let [a1, b1, c1, d1, e1, f1] = self.0;
        let [a2, b2, c2, d2, e2, f2] = other.0;
        Matrix([
            a1 * a2 + b1 * c2,
            a1 * b2 + b1 * d2,
            c1 * a2 + d1 * c2,
            c1 * b2 + d1 * d2,
            e1 * a2 + f1 * c2 + e2,
            e1 * b2 + f1 * d2 + f2,
        ])
    }
}

#[derive(Debug, Clone, Default)]
struct GraphicsState {
    ctm: Matrix,
}

#[derive(Debug, Clone)]
struct TextState {
    in_block: bool,
    matrix: Matrix,
    line_matrix: Matrix,
    font_name: String,
    font_size: f32,
    leading: f32,
    rise: f32,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            in_block: false,
            matrix: Matrix::default(),
            line_matrix: Matrix::default(),
            font_name: String::new(),
            font_size: 12.0,
            leading: 0.0,
            rise: 0.0,
        }
    }
}

impl TextState {
    fn begin(&mut self) {
        self.in_block = true;
        self.matrix = Matrix::default();
        self.line_matrix = Matrix::default();
    }

    fn move_line(&mut self, tx: f32, ty: f32) {
        self.line_matrix = Matrix::translate(tx, ty).multiply(&self.line_matrix);
        self.matrix = self.line_matrix;
    }

    fn next_line(&mut self) {
        let leading = self.leading;
        self.move_line(0.0, -leading);
    }
}

fn matrix_from(operands: &[Object]) -> Option<Matrix> {
    if operands.len() < 6 {
        return None;
    }
    let mut m = [0.0_f32; 6];
    for (slot, obj) in m.iter_mut().zip(operands) {
        *slot = get_number(obj)?;
    }
    Some(Matrix(m))
}

/// Extract a number from a PDF object.
pub(crate) fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

fn decode(encoding: Option<&Encoding>, bytes: &[u8]) -> String {
    match encoding {
        Some(enc) => LopdfDocument::decode_text(enc, bytes).unwrap_or_else(|_| decode_bytes(bytes)),
        None => decode_bytes(bytes),
    }
}

/// Decode a TJ array. Returns the text and the summed position adjustment.
/// Large negative adjustments become a space.
fn decode_tj(encoding: Option<&Encoding>, items: &[Object]) -> (String, f32) {
    let mut combined = String::new();
    let mut adjust = 0.0;

    for item in items {
        match item {
            Object::String(bytes, _) => combined.push_str(&decode(encoding, bytes)),
            other => {
                if let Some(n) = get_number(other) {
                    adjust += n;
                    if -n > TJ_SPACE_THRESHOLD && !combined.is_empty() && !combined.ends_with(' ')
                    {
                        combined.push(' ');
                    }
                }
            }
        }
    }

    (combined, adjust)
}

/// Decode bytes without a font encoding: UTF-16BE with BOM, UTF-8, Latin-1.
pub(crate) fn decode_bytes(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
