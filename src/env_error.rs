use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub EnvError

    KeyNotFound{name: String} = "identifier not found: {name}",
}

pub type Result<T> = std::result::Result<T, EnvError>;
