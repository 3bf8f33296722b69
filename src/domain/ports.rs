use crate::utils::error::Result;

/// Line-oriented output sink. Everything the demos print goes through here.
pub trait Console {
    fn line(&mut self, text: &str) -> Result<()>;
}

/// Something that can make a sound.
///
/// This is the statically checked capability: a function bounded on
/// `Soundable` only accepts types the compiler can prove implement it.
pub trait Soundable {
    fn sound(&self, console: &mut dyn Console) -> Result<()>;
}

impl<S: Soundable + ?Sized> Soundable for &S {
    fn sound(&self, console: &mut dyn Console) -> Result<()> {
        (**self).sound(console)
    }
}

impl<S: Soundable + ?Sized> Soundable for Box<S> {
    fn sound(&self, console: &mut dyn Console) -> Result<()> {
        (**self).sound(console)
    }
}
