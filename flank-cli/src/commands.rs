mod regions;

pub use self::regions::regions;
