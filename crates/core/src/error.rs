use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::WordError;
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
