//! Link annotations of a page.

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

use crate::model::LinkAnnotation;

use super::content::{decode_bytes, get_number};

/// URI link annotations of a page, in `/Annots` order.
///
/// Annotations that are not links, have no usable `/Rect`, or carry a
/// non-URI action are skipped.
pub(crate) fn page_links(doc: &LopdfDocument, page_id: ObjectId) -> Vec<LinkAnnotation> {
    let annots = match doc
        .get_dictionary(page_id)
        .ok()
        .and_then(|page| page.get(b"Annots").ok())
        .and_then(|annots| resolve(doc, annots).as_array().ok())
    {
        Some(annots) => annots,
        None => return Vec::new(),
    };

    annots
        .iter()
        .filter_map(|annot| resolve(doc, annot).as_dict().ok())
        .filter_map(|dict| link_annotation(doc, dict))
        .collect()
}

fn link_annotation(doc: &LopdfDocument, dict: &Dictionary) -> Option<LinkAnnotation> {
    let subtype = dict.get(b"Subtype").ok()?.as_name().ok()?;
    if subtype != b"Link" {
        return None;
    }

    let rect = resolve(doc, dict.get(b"Rect").ok()?).as_array().ok()?;
    if rect.len() < 4 {
        return None;
    }
    let mut corners = [0.0_f32; 4];
    for (slot, obj) in corners.iter_mut().zip(rect) {
        *slot = get_number(resolve(doc, obj))?;
    }

    let action = resolve(doc, dict.get(b"A").ok()?).as_dict().ok()?;
    if let Ok(kind) = action.get(b"S").and_then(Object::as_name) {
        if kind != b"URI" {
            return None;
        }
    }
    let url = match resolve(doc, action.get(b"URI").ok()?) {
        Object::String(bytes, _) => decode_bytes(bytes),
        _ => return None,
    };

    log::trace!("Link annotation {:?} -> {}", corners, url);
    Some(LinkAnnotation::new(corners, url))
}

/// Follow a reference, returning the object itself otherwise.
fn resolve<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}
