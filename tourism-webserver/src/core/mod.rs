pub use tourism_core::{db, repositories, util};

pub mod entities {
    pub use tourism_core::entities::*;
    #[cfg(test)]
    pub use tourism_entities::builders::*;
}

pub mod usecases {
    pub use tourism_core::usecases::*;
}

pub mod prelude {

    use std::result;

    pub use tourism_application::error::*;

    pub use super::{db::*, entities::*, repositories::*};

    pub type Result<T> = result::Result<T, tourism_application::error::AppError>;
}
