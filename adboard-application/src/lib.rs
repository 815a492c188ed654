pub mod use_cases;

pub use use_cases::{
    adverts::{
        AdvertWriteError, CreateAdvertUseCase, DeleteAdvertUseCase, UpdateAdvertUseCase,
    },
    check_auth::{AuthStatus, CheckAuthUseCase},
    login::{LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    signup::{SignupError, SignupUseCase},
    AuthenticatedSession,
};
