//! Pagination of SeaORM selects into 1-based pages.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Select};

use crate::model::api::PageDto;

/// One page of database models plus the totals needed by clients to page through the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Converts the page items, keeping the totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    pub fn into_dto<U: From<T>>(self) -> PageDto<U> {
        let page = self.map(U::from);

        PageDto {
            data: page.items,
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

/// Fetches page `page` (1-based, `0` is treated as `1`) of `select`.
///
/// Pages past the end return no items with the real totals.
pub async fn fetch_page<C, E>(
    select: Select<E>,
    db: &C,
    page: u64,
    page_size: u64,
) -> Result<Page<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let page = page.max(1);
    let page_size = page_size.max(1);

    let paginator = select.paginate(db, page_size);
    let total_items = paginator.num_items().await?;
    let items = paginator.fetch_page(page - 1).await?;

    Ok(Page {
        items,
        page,
        page_size,
        total_items,
        total_pages: total_items.div_ceil(page_size),
    })
}
