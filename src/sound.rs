/// Separator between an animal's name and its exclamation
pub const SEPARATOR: &str = " says: ";

/// Anything that can make a sound
pub trait SoundMaker {
    fn make_sound(&self) -> String;
}

impl<T: SoundMaker + ?Sized> SoundMaker for &T {
    fn make_sound(&self) -> String {
        (**self).make_sound()
    }
}

impl<T: SoundMaker + ?Sized> SoundMaker for Box<T> {
    fn make_sound(&self) -> String {
        (**self).make_sound()
    }
}

fn phrase(name: &str, exclamation: &str) -> String {
    format!("{}{}{}", name, SEPARATOR, exclamation)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    pub name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl SoundMaker for Dog {
    fn make_sound(&self) -> String {
        phrase(&self.name, "Woof!")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    pub name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl SoundMaker for Cat {
    fn make_sound(&self) -> String {
        phrase(&self.name, "Meow!")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cow {
    pub name: String,
}

impl Cow {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl SoundMaker for Cow {
    fn make_sound(&self) -> String {
        phrase(&self.name, "Moo!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_uses_its_own_exclamation() {
        assert_eq!(Dog::new("Buddy").make_sound(), "Buddy says: Woof!");
        assert_eq!(Cat::new("Whiskers").make_sound(), "Whiskers says: Meow!");
        assert_eq!(Cow::new("Bessie").make_sound(), "Bessie says: Moo!");
    }

    #[test]
    fn empty_name_is_not_rejected() {
        assert_eq!(Dog::new("").make_sound(), " says: Woof!");
        assert_eq!(Cow::new(String::new()).make_sound(), " says: Moo!");
    }

    #[test]
    fn sound_is_name_separator_exclamation() {
        for name in ["Rex", "Ünïcödé", "two words", "  padded  "] {
            assert_eq!(Cat::new(name).make_sound(), format!("{name} says: Meow!"));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let cow = Cow::new("Bessie");
        assert_eq!(cow.make_sound(), cow.make_sound());
        assert_eq!(cow, Cow::new("Bessie"));
    }

    #[test]
    fn references_and_boxes_dispatch_to_the_inner_value() {
        let dog = Dog::new("Buddy");
        let by_ref: &dyn SoundMaker = &dog;
        let boxed: Box<dyn SoundMaker> = Box::new(dog.clone());
        assert_eq!(by_ref.make_sound(), dog.make_sound());
        assert_eq!(boxed.make_sound(), dog.make_sound());
    }
}
