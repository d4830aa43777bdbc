use crate::{
    error::SheetError,
    font::BuiltinFont,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

/// A document is the main object that stores all the contents of the PDF,
/// then renders it out with a call to [Document::write]
#[derive(Default)]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Document {
    /// Sets information about the document. If not provided, no information
    /// block will be written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id. The id stays
    /// valid for the lifetime of the document.
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Write the entire document to the writer. Note: although this can write
    /// to arbitrary streams, the entire document is rendered in memory first.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), SheetError> {
        let Document {
            info,
            pages,
            page_order,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        for font in BuiltinFont::ALL {
            font.write(&mut refs, &mut writer);
        }

        // page refs are keyed by page_order index, not arena index, so that
        // reordering pages before writing works as expected
        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (page_index, id) in page_order.iter().enumerate() {
            pages[*id].write(&mut refs, page_index, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
