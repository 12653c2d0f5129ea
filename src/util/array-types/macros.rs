/// Calls a locally defined macro once for every combination of tokens.
///
/// Each `[...]` group is a list of token trees. The callback is defined
/// inline with a single rule, and is invoked with one token tree from each
/// group, in group order. The operator impls use this to cover owned and
/// borrowed operands without writing each impl four times.
macro_rules! cartesian {
    (
        $([$($groups:tt)*])*
        $mac:ident!($($mac_match:tt)*)
        => {$($mac_body:tt)*}$(;)*
    )
    => {
        macro_rules! $mac {
            ($($mac_match)*) => {$($mac_body)*};
        }
        cartesian__!{ @product::next($([$($groups)*])*) -> ($mac!()) }
    };
}

#[doc(hidden)]
macro_rules! cartesian__ {

    (@product::next([$($token:tt)+] $($rest:tt)*) -> $cb:tt)
    => { cartesian__!{ @product::unpack([$($token)+] $($rest)*) -> $cb } };
    // all groups consumed
    (@product::next() -> ($mac:ident!($($args:tt)*)))
    => {$mac!{$($args)*}};

    // `$rest` is repeated once per token below, so it has to be a single tt.
    (@product::unpack([$($token:tt)*] $($rest:tt)*) -> $cb:tt)
    => {cartesian__!{ @product::unpack_2([$($token)*] [$($rest)*]) -> $cb }};

    (@product::unpack_2([$($token:tt)*] $rest:tt) -> $cb:tt)
    => { $( cartesian__!{ @product::unpack_3($token $rest) -> $cb } )* };

    (@product::unpack_3($token:tt [$($rest:tt)*]) -> ($mac:ident!($($args:tt)*)))
    => {cartesian__!{ @product::next($($rest)*) -> ($mac!($($args)*$token)) }};
}

/// `cartesian!`, plus `@{...}` shorthands for the scalar types.
///
/// These lists decide which primitives implement `Semiring`, `Ring` and
/// `Real`.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each__!{[$($arg)*] -> []} };
}

#[doc(hidden)]
macro_rules! gen_each__ {
    // explicit group
    ([[$($alternatives:tt)*] $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        $($alternatives)*
    ]] }};

    ([@{real} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
    ]] }};

    ([@{ring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
    ]] }};

    ([@{semiring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
        {u8} {u16} {u32} {u64} {usize}
    ]] }};

    ([$mac:ident!$($defn_args:tt)*] -> [$($groups:tt)*])
    => {
        cartesian!{
            $($groups)*
            $mac!$($defn_args)*
        }
    };
}

#[cfg(test)]
mod tests {
    trait InReal {}
    trait InRing {}
    trait InSemiring {}

    gen_each!{ @{real} impl_in_real!({$X:ty}) => { impl InReal for $X {} } }
    gen_each!{ @{ring} impl_in_ring!({$X:ty}) => { impl InRing for $X {} } }
    gen_each!{ @{semiring} impl_in_semiring!({$X:ty}) => { impl InSemiring for $X {} } }

    #[test]
    fn scalar_groups_nest() {
        fn real<X: InReal + InRing + InSemiring>() {}
        fn ring<X: InRing + InSemiring>() {}
        fn semiring<X: InSemiring>() {}

        real::<f32>();
        real::<f64>();
        ring::<i8>();
        ring::<i16>();
        ring::<i32>();
        ring::<i64>();
        ring::<isize>();
        semiring::<u8>();
        semiring::<u16>();
        semiring::<u32>();
        semiring::<u64>();
        semiring::<usize>();
    }

    #[derive(Debug, Copy, Clone, PartialEq)]
    struct Pair<X>(X, X);

    gen_each!{
        [ [(   ) (   )] [('a,) (&'a)] ]
        [ [(   ) (   )] [('b,) (&'b)] ]
        @{ring}
        impl_pair_sub!(
            [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
            [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
            {$X:ty}
        ) => {
            impl<$($lt_a)* $($lt_b)*> std::ops::Sub<$($ref_b)* Pair<$X>> for $($ref_a)* Pair<$X> {
                type Output = Pair<$X>;

                fn sub(self, other: $($ref_b)* Pair<$X>) -> Pair<$X>
                { Pair(self.0 - other.0, self.1 - other.1) }
            }
        }
    }

    #[test]
    fn operand_groups_cover_references() {
        let a = Pair(5i32, 7);
        let b = Pair(1i32, 2);
        assert_eq!(a - b, Pair(4, 5));
        assert_eq!(&a - b, Pair(4, 5));
        assert_eq!(a - &b, Pair(4, 5));
        assert_eq!(&a - &b, Pair(4, 5));

        assert_eq!(Pair(0.5f64, 1.0) - &Pair(0.25f64, 0.25), Pair(0.25, 0.75));
        assert_eq!(&Pair(3i8, 0) - Pair(1i8, 1), Pair(2, -1));
    }
}
