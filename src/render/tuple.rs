use std::fmt;

use super::Render;

impl Render for () {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

macro_rules! render_tuple {
    ($head:ident $($tail:ident)*) => {
        impl<$head: Render, $($tail: Render),*> Render for ($head, $($tail,)*) {
            #[allow(non_snake_case)]
            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let ($head, $($tail,)*) = self;
                f.write_str("(")?;
                $head.render(f)?;
                $(
                    f.write_str(", ")?;
                    $tail.render(f)?;
                )*
                f.write_str(")")
            }
        }
    };
}

render_tuple!(A);
render_tuple!(A B);
render_tuple!(A B C);
render_tuple!(A B C D);
render_tuple!(A B C D E);
render_tuple!(A B C D E F);
render_tuple!(A B C D E F G);
render_tuple!(A B C D E F G H);
render_tuple!(A B C D E F G H I);
render_tuple!(A B C D E F G H I J);
render_tuple!(A B C D E F G H I J K);
render_tuple!(A B C D E F G H I J K L);
